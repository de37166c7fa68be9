use crate::strings::Strings;

/// Class marking a rendered fastfetch block; refresh buttons key off it.
pub const OUTPUT_CODE_CLASS: &str = "language-fastfetch";

/// Maps a run outcome onto the reply text.
pub fn present(ok: bool, output: &str, error: &str, strings: &Strings) -> String {
    if !ok {
        return strings.error_with(error);
    }
    if output.is_empty() {
        return strings.no_data.to_string();
    }
    format!(
        "<pre><code class=\"{}\">{}</code></pre>",
        OUTPUT_CODE_CLASS,
        html_escape::encode_text(output)
    )
}

/// Whether `reply` carries rendered output, as opposed to a template message.
pub fn is_rendered_output(reply: &str) -> bool {
    reply.contains(OUTPUT_CODE_CLASS)
}
