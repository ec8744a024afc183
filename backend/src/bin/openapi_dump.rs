//! Print the OpenAPI document as JSON.

use std::io::Write;

use utoipa::OpenApi;
use yourside::doc::ApiDoc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
