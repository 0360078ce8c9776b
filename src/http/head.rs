use std::collections::HashMap;

/// Parsed status line and header block of an HTTP response.
///
/// `status` is `None` whenever the status line is structurally broken; the
/// header map is keyed by lowercased names with trimmed values, and a
/// repeated header keeps only its last occurrence.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: Option<u16>,
    pub fields: HashMap<String, String>,
}

impl ResponseHead {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }
}

/// Parses the raw bytes that precede the `\r\n\r\n` separator.
///
/// Never fails: a malformed status line yields `status: None` with an empty
/// map, and lines without a colon are skipped. Latin-1 decoding is total over
/// bytes, so undecodable input cannot abort parsing.
pub fn parse_response_head(raw: &[u8]) -> ResponseHead {
    let text = decode_latin1(raw);
    let mut lines = text.split("\r\n");

    // "HTTP/1.1 200 OK" -> the second space-separated token is the code
    let status_line = lines.next().unwrap_or("");
    let status = match status_line.split(' ').nth(1).map(str::parse::<u16>) {
        Some(Ok(code)) => code,
        _ => {
            return ResponseHead {
                status: None,
                fields: HashMap::new(),
            };
        }
    };

    let mut fields = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let Some((name, value)) = line.split_once(':') else {
            continue;
        };

        fields.insert(name.trim().to_lowercase(), value.trim().to_string());
    }

    ResponseHead {
        status: Some(status),
        fields,
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
