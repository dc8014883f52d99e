//! Interactive prompts used when no API token has been stored yet.

use super::credential::ApiToken;
use crate::constants::API_TOKEN_SIGNUP_URL;
use crate::error::AppError;
use crate::writers::colors::{error_fg, notice_fg};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Asks for an API token until a well-formed one is entered.
///
/// Each line read from `input` is validated with [`ApiToken::parse`]; invalid
/// entries print "Invalid API key" and ask again. End of input yields
/// [`AppError::MissingCredential`].
///
/// # Example
/// ```no_run
/// use soccer_cli::config::user_prompts::prompt_for_api_token;
///
/// # async fn example() -> Result<(), soccer_cli::AppError> {
/// let stdin = tokio::io::BufReader::new(tokio::io::stdin());
/// let token = prompt_for_api_token(stdin, &mut std::io::stdout()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_token<R, W>(mut input: R, out: &mut W) -> Result<ApiToken, AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    styled_line(out, "No API key found!", notice_fg())?;
    styled_line(
        out,
        &format!("Please visit {API_TOKEN_SIGNUP_URL} and get an API token."),
        notice_fg(),
    )?;

    loop {
        queue!(
            out,
            SetForegroundColor(notice_fg()),
            SetAttribute(Attribute::Bold),
            Print("Enter API key: "),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            return Err(AppError::MissingCredential);
        }

        match ApiToken::parse(&line) {
            Ok(token) => return Ok(token),
            Err(e) => {
                tracing::debug!("Rejected API key input: {e}");
                styled_line(out, "Invalid API key", error_fg())?;
            }
        }
    }
}

fn styled_line<W: Write>(out: &mut W, text: &str, color: Color) -> Result<(), AppError> {
    queue!(
        out,
        SetForegroundColor(color),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )?;
    Ok(())
}
