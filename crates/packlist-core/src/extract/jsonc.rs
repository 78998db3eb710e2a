//! `//` and `/* */` comment stripping for JSONC manifests.

/// Strip line and block comments from a JSONC payload.
///
/// Comment openers inside string literals or inside an already-open
/// comment are inert. A line comment ends at a literal newline, which is
/// kept in the output so parse errors still point at the right line.
/// Block comment bodies are dropped entirely, including the newlines they
/// span.
pub fn strip_json_comments(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    let mut in_line = false;
    let mut in_block = false;
    let mut in_string = false;

    let mut i = 0;
    while i < src.len() {
        let byte = src[i];
        let next = src.get(i + 1).copied();

        if in_string {
            out.push(byte);
            match byte {
                // keep the escaped byte as-is, whatever it is
                b'\\' => {
                    if let Some(escaped) = next {
                        out.push(escaped);
                        i += 1;
                    }
                }
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        if in_line {
            if byte == b'\n' {
                in_line = false;
                out.push(b'\n');
            }
            i += 1;
            continue;
        }

        if in_block {
            if byte == b'*' && next == Some(b'/') {
                in_block = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        match (byte, next) {
            (b'/', Some(b'/')) => {
                in_line = true;
                i += 2;
            }
            (b'/', Some(b'*')) => {
                in_block = true;
                i += 2;
            }
            (b'"', _) => {
                in_string = true;
                out.push(byte);
                i += 1;
            }
            _ => {
                out.push(byte);
                i += 1;
            }
        }
    }

    out
}
