// https://www.getpaint.net/doc/latest/WorkingWithPalettes.html

pub(crate) const PAINTNET_MAGIC: &str = ";paint.net Palette File";
const PAINTNET_COMMENT: char = ';';

/// paint.net marks comments (including its own magic line) with a leading semicolon.
pub(crate) fn is_paintnet_comment(line: &str) -> bool {
	line.starts_with(PAINTNET_COMMENT)
}
