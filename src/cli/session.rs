use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::render::{BANNER, TOO_SHORT_MESSAGE, render_report};
use crate::entities::EntityExtractor;
use crate::pipeline::{AnalysisError, Analyzer};
use crate::verification::KnowledgeBase;

const PROMPT: &str = "\nEnter full news text (one line, or 'exit' to quit):\n> ";

/// Reads one article per line until EOF or `exit`, writing a report card for
/// each. Returns the number of texts that were analyzed.
pub async fn run_interactive<E, K, R, W>(
    analyzer: &Analyzer<E, K>,
    input: R,
    mut output: W,
) -> std::io::Result<usize>
where
    E: EntityExtractor,
    K: KnowledgeBase,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut analyzed = 0;

    output.write_all(BANNER.as_bytes()).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") {
            break;
        }

        let rendered = match analyzer.analyze(text).await {
            Ok(report) => {
                analyzed += 1;
                render_report(&report)
            }
            Err(AnalysisError::InputTooShort { words, .. }) => {
                debug!(words, "Interactive input too short");
                format!("\n{TOO_SHORT_MESSAGE}\n")
            }
        };
        output.write_all(rendered.as_bytes()).await?;
    }

    output.flush().await?;
    Ok(analyzed)
}
