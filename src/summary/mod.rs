//! Human-readable scan summaries.
//!
//! The summary is always assembled into one multi-line string before it is
//! handed to a [`Renderer`], so a gradient can span the whole block instead of
//! restarting on every line.

use colored::Colorize;

use crate::result::ScanResult;

/// Output capability for an assembled summary.
pub trait Renderer {
    /// Writes `text` as one unit.
    fn render(&self, text: &str);
}

/// Writes text to stdout unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, text: &str) {
        println!("{text}");
    }
}

/// Writes text to stdout with a rainbow gradient running across the whole block.
#[derive(Debug, Clone, Copy)]
pub struct GradientRenderer {
    /// Hue of the first character, in degrees.
    pub start_hue: f64,
    /// Total hue sweep across the block, in degrees.
    pub sweep: f64,
}

impl Default for GradientRenderer {
    fn default() -> Self {
        Self {
            start_hue: 0.0,
            sweep: 300.0,
        }
    }
}

impl GradientRenderer {
    /// Colors every visible character by its position in the entire block.
    /// Newlines are kept as-is and do not restart the gradient.
    pub fn paint(&self, text: &str) -> String {
        let visible = text.chars().filter(|c| !c.is_whitespace()).count();
        let step = if visible > 1 {
            self.sweep / (visible - 1) as f64
        } else {
            0.0
        };

        let mut painted = String::with_capacity(text.len() * 20);
        let mut index = 0usize;
        for c in text.chars() {
            if c.is_whitespace() {
                painted.push(c);
                continue;
            }
            let (r, g, b) = hue_to_rgb(self.start_hue + step * index as f64);
            painted.push_str(&c.to_string().truecolor(r, g, b).to_string());
            index += 1;
        }
        painted
    }
}

impl Renderer for GradientRenderer {
    fn render(&self, text: &str) {
        println!("{}", self.paint(text));
    }
}

/// Converts a fully saturated, full-value hue (degrees) to RGB.
fn hue_to_rgb(hue: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u8 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let scale = |v: f64| (v * 255.0).round() as u8;
    (scale(r), scale(g), scale(b))
}

/// Assembles the summary of a result.
///
/// The header is the domain underlined with one dash per character. A failed
/// result shows its message and status; a successful one shows the IP address,
/// category, the content flags and the risk score.
pub fn format_summary(result: &ScanResult) -> String {
    let domain = result.domain();
    let mut output = format!("{}\n{}", domain, "-".repeat(domain.chars().count()));

    if !result.success() {
        output.push_str(&format!("\nmessage: {}", result.message()));
        output.push_str(&format!("\nstatus:  {}", result.status_code()));
        return output;
    }

    output.push_str(&format!("\nIP Address: {}", result.ip_address()));
    output.push_str(&format!("\nCategory:   {}", result.category()));
    output.push_str(&format!("\nAdult:      {}", result.adult()));
    output.push_str(&format!("\nMalware:    {}", result.malware()));
    output.push_str(&format!("\nPhishing:   {}", result.phishing()));
    output.push_str(&format!("\nSpamming:   {}", result.spamming()));
    output.push_str(&format!("\nSuspicious: {}", result.suspicious()));
    output.push_str(&format!("\nUnsafe:     {}", result.is_unsafe()));
    output.push_str(&format!("\nRisk score: {}", result.risk_score()));
    output
}
