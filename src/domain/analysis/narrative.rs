//! Renders the "why did it win" sentence for a [`WinnerAnalysis`].

use super::winner_analyzer::{AnalysisSettings, CriterionBreakdown, WinType, WinnerAnalysis};

/// Builds the explanation for an analysis whose `explanation` is not yet set.
pub(super) fn explain(analysis: &WinnerAnalysis, settings: &AnalysisSettings) -> String {
    let strengths = top_strengths(&analysis.strong, settings.max_strengths);
    let weaknesses = top_weaknesses(&analysis.weak, settings.max_weaknesses);

    if strengths.is_empty() && weaknesses.is_empty() {
        return format!(
            "{} wins with a score of {:.1} compared to {}'s {:.1}.",
            analysis.winner,
            f64::from(analysis.winner_score),
            analysis.runner_up,
            f64::from(analysis.runner_up_score),
        );
    }

    let ctx = Context::new(analysis);
    match analysis.win_type {
        WinType::Dominant => dominant(&ctx, &strengths),
        WinType::Strategic => strategic(&ctx, &strengths, &weaknesses, settings),
        WinType::Close => close(&ctx, &strengths, analysis.margin_percentage),
        WinType::Upset => upset(&ctx, &strengths, &weaknesses),
        WinType::Balanced => balanced(&ctx, &strengths),
    }
}

/// Largest advantages first.
fn top_strengths(strong: &[CriterionBreakdown], limit: usize) -> Vec<&CriterionBreakdown> {
    let mut sorted: Vec<_> = strong.iter().collect();
    sorted.sort_by(|a, b| b.advantage.cmp(&a.advantage));
    sorted.truncate(limit);
    sorted
}

/// Most negative advantages first.
fn top_weaknesses(weak: &[CriterionBreakdown], limit: usize) -> Vec<&CriterionBreakdown> {
    let mut sorted: Vec<_> = weak.iter().collect();
    sorted.sort_by(|a, b| a.advantage.cmp(&b.advantage));
    sorted.truncate(limit);
    sorted
}

/// Pre-formatted pieces shared by every template.
struct Context<'a> {
    winner: &'a str,
    runner_up: &'a str,
    winner_score: String,
    runner_up_score: String,
    margin: String,
}

impl<'a> Context<'a> {
    fn new(analysis: &'a WinnerAnalysis) -> Self {
        Self {
            winner: &analysis.winner,
            runner_up: &analysis.runner_up,
            winner_score: points(analysis.winner_score),
            runner_up_score: points(analysis.runner_up_score),
            margin: points(analysis.margin),
        }
    }
}

fn points(value: i32) -> String {
    format!("{:.1}", f64::from(value))
}

/// Rounds half away from zero to one decimal, so 1.25 reads as 1.3.
fn percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn names(criteria: &[&CriterionBreakdown]) -> String {
    criteria
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}

fn dominant(ctx: &Context<'_>, strengths: &[&CriterionBreakdown]) -> String {
    match strengths {
        [only] => format!(
            "{} dominates by excelling in {} (contributing +{} points) while maintaining superiority across all other criteria, winning {} to {}.",
            ctx.winner,
            only.name,
            points(only.advantage),
            ctx.winner_score,
            ctx.runner_up_score,
        ),
        [] => format!(
            "{} achieves a dominant victory, winning {} to {}.",
            ctx.winner, ctx.winner_score, ctx.runner_up_score,
        ),
        several => {
            let list = several
                .iter()
                .map(|c| format!("{} (+{})", c.name, points(c.advantage)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{} achieves a dominant {}-{} victory by outperforming {} in every area, with key advantages in {} points.",
                ctx.winner, ctx.winner_score, ctx.runner_up_score, ctx.runner_up, list,
            )
        }
    }
}

fn strategic(
    ctx: &Context<'_>,
    strengths: &[&CriterionBreakdown],
    weaknesses: &[&CriterionBreakdown],
    settings: &AnalysisSettings,
) -> String {
    let advantages = strengths
        .iter()
        .filter(|c| c.weight >= settings.high_weight_threshold)
        .map(|c| format!("{} (weight {}, +{} points)", c.name, c.weight, points(c.advantage)))
        .collect::<Vec<_>>()
        .join(" and ");

    if advantages.is_empty() {
        return format!(
            "{} wins strategically with a {}-point victory ({} to {}).",
            ctx.winner, ctx.margin, ctx.winner_score, ctx.runner_up_score,
        );
    }

    if weaknesses.is_empty() {
        format!(
            "{} wins strategically by focusing on what matters most: {}, securing a {}-point victory ({} to {}).",
            ctx.winner, advantages, ctx.margin, ctx.winner_score, ctx.runner_up_score,
        )
    } else {
        format!(
            "{} wins strategically ({} vs {}) by excelling in the most critical areas: {}. While {} leads in {}, these lower-priority criteria couldn't overcome {}'s {}-point advantage in high-weight areas.",
            ctx.winner,
            ctx.winner_score,
            ctx.runner_up_score,
            advantages,
            ctx.runner_up,
            names(weaknesses),
            ctx.winner,
            ctx.margin,
        )
    }
}

fn close(ctx: &Context<'_>, strengths: &[&CriterionBreakdown], margin_percentage: f64) -> String {
    let margin_percentage = percent(margin_percentage);
    match strengths.first() {
        Some(decisive) => format!(
            "{} narrowly beats {} {} to {} ({:.1}% margin) with the decisive factor being {}, where {} contributed {} more points than {}.",
            ctx.winner,
            ctx.runner_up,
            ctx.winner_score,
            ctx.runner_up_score,
            margin_percentage,
            decisive.name,
            ctx.winner,
            points(decisive.advantage),
            ctx.runner_up,
        ),
        None => format!(
            "{} narrowly beats {} {} to {} ({:.1}% margin).",
            ctx.winner, ctx.runner_up, ctx.winner_score, ctx.runner_up_score, margin_percentage,
        ),
    }
}

fn upset(
    ctx: &Context<'_>,
    strengths: &[&CriterionBreakdown],
    weaknesses: &[&CriterionBreakdown],
) -> String {
    if strengths.is_empty() || weaknesses.is_empty() {
        return format!(
            "{} pulls off an upset victory ({} vs {}) through favorable weighting.",
            ctx.winner, ctx.winner_score, ctx.runner_up_score,
        );
    }

    // Deficits are reported as positive "points behind".
    let behind = weaknesses
        .iter()
        .map(|c| format!("{} ({} points behind)", c.name, points(c.advantage.saturating_abs())))
        .collect::<Vec<_>>()
        .join(" and ");
    let ahead = strengths
        .iter()
        .map(|c| format!("{} (+{})", c.name, points(c.advantage)))
        .collect::<Vec<_>>()
        .join(" and ");

    format!(
        "{} pulls off an upset victory ({} vs {}) despite {} leading in important areas like {}. {}'s strong performance in {} combined with favorable weighting secured the win.",
        ctx.winner,
        ctx.winner_score,
        ctx.runner_up_score,
        ctx.runner_up,
        behind,
        ctx.winner,
        ahead,
    )
}

fn balanced(ctx: &Context<'_>, strengths: &[&CriterionBreakdown]) -> String {
    let opening = format!(
        "{} wins through consistent performance across all criteria ({} to {})",
        ctx.winner, ctx.winner_score, ctx.runner_up_score,
    );

    match strengths {
        [] => format!("{}, securing a {}-point victory.", opening, ctx.margin),
        [only] => format!(
            "{}, with particular strength in {}, securing a {}-point victory.",
            opening, only.name, ctx.margin,
        ),
        [first, second, ..] => format!(
            "{}, with particular strength in {} and {}, accumulating enough small advantages to secure a {}-point victory.",
            opening, first.name, second.name, ctx.margin,
        ),
    }
}
