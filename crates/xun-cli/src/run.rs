//! One-shot workflow runs.

use xun_agent::{MentionOutcome, TriageReport, Workflows};

pub(crate) async fn run_trends(workflows: &Workflows) -> anyhow::Result<()> {
    let result = workflows.trends.run().await?;
    println!("posted {}: {}", result.post.id, result.analysis);
    Ok(())
}

pub(crate) async fn run_mentions(workflows: &Workflows) -> anyhow::Result<()> {
    let report = workflows.mentions.run().await?;
    print!("{}", render_report(&report));
    Ok(())
}

/// One line per classified mention plus a totals line.
pub(crate) fn render_report(report: &TriageReport) -> String {
    let mut out = String::new();
    for result in &report.outcomes {
        let line = match &result.outcome {
            MentionOutcome::Ignored => "ignored".to_string(),
            MentionOutcome::Replied {
                reply,
                published_reply_id: Some(id),
            } => format!("replied ({id}): {reply}"),
            MentionOutcome::Replied { reply, .. } => format!("reply (not posted): {reply}"),
            MentionOutcome::TokenDeployed(token) => format!(
                "deployed ${} {} at {}",
                token.concept.ticker, token.concept.name, token.address
            ),
            MentionOutcome::SourceNotFound => "skipped: mention not in batch".to_string(),
            MentionOutcome::Failed { error } => format!("failed: {error}"),
        };
        out.push_str(&format!("{}\t{line}\n", result.tweet_id));
    }
    out.push_str(&format!(
        "{} mentions, {} deployed, {} failed\n",
        report.outcomes.len(),
        report.deployed().count(),
        report.failed_count()
    ));
    out
}
