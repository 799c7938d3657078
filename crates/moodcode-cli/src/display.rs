//! Terminal rendering for mood records

use colored::Colorize;
use moodcode::MoodRecord;

const RULE_WIDTH: usize = 50;

/// Render a freshly generated record with its color swatch.
pub fn render_record(record: &MoodRecord) {
    let rule = "=".repeat(RULE_WIDTH);
    let swatch = "    "
        .on_truecolor(record.rgb.red, record.rgb.green, record.rgb.blue)
        .to_string();

    println!("\n{}", rule);
    println!("{}", "🌻 YOUR MOOD CODE 🌻".bold());
    println!("{}", rule);
    println!("\nMood: {} {}", record.mood.cyan().bold(), record.symbol);
    println!("Code: {}", record.code.green().bold());
    println!("Color: {} {}", swatch, record.color);
    println!(
        "Time: {}",
        record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
    );
    println!("\n{}", message_for(&record.mood));
    println!("{}\n", rule);
}

/// Render recent history, newest first.
pub fn render_history(records: &[MoodRecord]) {
    if records.is_empty() {
        println!("\nNo mood history found. Generate some moods first!");
        return;
    }

    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule);
    println!("{}", "📓 YOUR MOOD HISTORY 📓".bold());
    println!("{}", rule);

    for (i, record) in records.iter().rev().enumerate() {
        println!(
            "{}. {} - {} {} - {}",
            i + 1,
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
            record.mood.cyan(),
            record.symbol,
            record.code.green()
        );
    }

    println!("{}\n", rule);
}

fn message_for(mood: &str) -> &'static str {
    match mood {
        "Happy" => "Your positivity is contagious! Keep shining! ✨",
        "Calm" => "Peace is within you. Carry this serenity forward. 🕊️",
        "Energetic" => "Channel that energy into something amazing! ⚡",
        "Creative" => "The world needs your unique perspective. 🎨",
        "Melancholy" => "Every feeling is valid. This too shall pass. 🌧️",
        "Focused" => "Your concentration will lead to great things. 🎯",
        _ => "Embrace your current state.",
    }
}
