//! C source rendering.
//!
//! Output layout:
//!
//! ```text
//! // Auto-generated from guitar.mp3
//! #include <stdint.h>
//!
//! __attribute__((section(".rodata")))
//! __attribute__((aligned(4)))
//! const uint8_t mp3_file_data[] = {
//!     0x49, 0x44, 0x33, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x23, 0x54, 0x53, 
//!     0x53
//! };
//!
//! const size_t mp3_file_size = 13;
//! ```
//!
//! Every element line is indented, lines break after `bytes_per_line` tokens,
//! and only lines followed by another line end in the `", "` separator. The
//! last token has no trailing comma. An empty input
//! closes the brace on the line after it opens.

use std::io::{self, Write};

use crate::config::EmbedConfig;

/// Header line providing the fixed-width byte type.
pub const INCLUDE_LINE: &str = "#include <stdint.h>";

/// Element type of the generated array.
pub const BYTE_TYPE: &str = "uint8_t";

/// Type of the generated size constant.
pub const SIZE_TYPE: &str = "size_t";

/// Writes the generated source for `data` to `out`.
pub fn write_source<W: Write>(out: &mut W, data: &[u8], config: &EmbedConfig) -> io::Result<()> {
    writeln!(out, "// Auto-generated from {}", config.input_display_name())?;
    writeln!(out, "{}", INCLUDE_LINE)?;
    writeln!(out)?;
    writeln!(out, "__attribute__((section(\"{}\")))", config.section)?;
    writeln!(out, "__attribute__((aligned({})))", config.alignment)?;
    writeln!(out, "const {} {}[] = {{", BYTE_TYPE, config.array_symbol)?;
    write_elements(out, data, config.bytes_per_line, config.indent)?;
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(
        out,
        "const {} {} = {};",
        SIZE_TYPE,
        config.size_symbol,
        data.len()
    )?;
    Ok(())
}

/// Renders the generated source for `data` into a string.
pub fn render_source(data: &[u8], config: &EmbedConfig) -> String {
    let mut buf = Vec::with_capacity(estimated_len(data.len(), config));
    // Writing into a Vec cannot fail.
    let _ = write_source(&mut buf, data, config);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Number of element lines the array body occupies.
pub fn line_count(byte_count: usize, bytes_per_line: usize) -> usize {
    byte_count.div_ceil(bytes_per_line.max(1))
}

fn write_elements<W: Write>(
    out: &mut W,
    data: &[u8],
    bytes_per_line: usize,
    indent: usize,
) -> io::Result<()> {
    let mut lines = data.chunks(bytes_per_line.max(1)).peekable();
    while let Some(line) = lines.next() {
        write!(out, "{:indent$}", "", indent = indent)?;
        for (i, byte) in line.iter().enumerate() {
            if i > 0 {
                out.write_all(b", ")?;
            }
            write!(out, "0x{:02X}", byte)?;
        }
        if lines.peek().is_some() {
            out.write_all(b", ")?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// "0xHH, " is six bytes per element, plus the fixed header and footer.
fn estimated_len(byte_count: usize, config: &EmbedConfig) -> usize {
    256 + byte_count * 6 + line_count(byte_count, config.bytes_per_line) * (config.indent + 1)
}
