use inksac::prelude::*;

/// Terminal coloring for input lines and diagnostics. Every method falls
/// back to plain text when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    fn plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors the command word cyan and any `-` flags yellow.
    pub fn highlight_command(&self, input: &str) -> String {
        if self.plain() {
            return input.to_string();
        }

        let mut parts: Vec<String> = input.split_whitespace().map(String::from).collect();
        if parts.is_empty() {
            return input.to_string();
        }

        let command_style = Style::builder().foreground(Color::Cyan).bold().build();
        parts[0] = parts[0].clone().style(command_style).to_string();

        let flag_style = Style::builder().foreground(Color::Yellow).build();
        for part in parts.iter_mut().skip(1) {
            if part.starts_with('-') {
                *part = part.clone().style(flag_style).to_string();
            }
        }

        parts.join(" ")
    }

    pub fn highlight_error(&self, message: &str) -> String {
        if self.plain() {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        message.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder().foreground(Color::RGB(128, 128, 128)).build();
        hint.style(hint_style).to_string()
    }
}
