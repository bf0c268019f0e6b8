//! Line-based stdio loop: one JSON-RPC message per line

use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};
use unitconv_core::ConvError;

use crate::config::ServerConfig;
use crate::protocol::{handle_request, McpError, McpRequest, McpResponse, PARSE_ERROR};

/// Serve requests until EOF or an I/O failure on either side.
pub fn serve<R: BufRead, W: Write>(config: &ServerConfig, mut reader: R, mut writer: W) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            info!("client disconnected (EOF)");
            return Ok(());
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(s) => s.trim(),
            Err(e) => {
                warn!(error = %e, "request is not valid UTF-8");
                let response = McpResponse::failure(None, McpError::new(PARSE_ERROR, format!("Parse error: {}", e)));
                write_response(&mut writer, &response)?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "received");

        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "unparsable request");
                let response = McpResponse::failure(None, McpError::new(PARSE_ERROR, format!("Parse error: {}", e)));
                write_response(&mut writer, &response)?;
                continue;
            }
        };

        debug!(method = %request.method, "processing");
        let response = handle_request(config, &request);

        // Notifications (no id) should NOT receive a response
        if request.id.is_none() {
            debug!(method = %request.method, "notification processed");
            continue;
        }

        write_response(&mut writer, &response)?;
        debug!(method = %request.method, "sent response");
    }
}

fn write_response<W: Write>(writer: &mut W, response: &McpResponse) -> io::Result<()> {
    let json = match serde_json::to_string(response) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "failed to serialize response");
            let fallback = McpResponse::failure(
                response.id.clone(),
                McpError::internal(ConvError::internal(format!("unserializable response: {}", e))),
            );
            match serde_json::to_string(&fallback) {
                Ok(s) => s,
                Err(_) => return Ok(()),
            }
        }
    };
    writeln!(writer, "{}", json)?;
    writer.flush()
}
