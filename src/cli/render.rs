use ansi_term::Colour;

use crate::{
    session::{journal::MoodCategory, summary::Summary, Role, Session},
    utils::percentage::count_percentage,
};

const BAR_WIDTH: usize = 40;

pub fn success(message: &str) {
    println!("{}", Colour::Green.paint(message));
}

pub fn failure(message: &str) {
    println!("{}", Colour::Red.paint(message));
}

pub fn banner(message: &str) {
    println!("{}", Colour::Green.bold().paint(message));
}

pub fn header(title: &str) {
    println!("\n{}", Colour::Green.bold().paint(title));
}

/// The calendar view: every logged day in date order, or a placeholder when
/// nothing has been logged yet.
pub fn print_calendar(session: &Session) {
    let role = session
        .role()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Your".to_string());
    header(&format!("📅 {role} Calendar"));

    if session.entries().is_empty() {
        println!("No data logged yet.");
        return;
    }
    for entry in session.entries().values() {
        println!(
            "📅 {}: {} {}, stress {}",
            entry.date,
            entry.mood.emoji(),
            entry.mood,
            entry.stress
        );
    }
}

/// The dashboard view: average stress plus a bar per mood category.
pub fn print_dashboard(role: Option<Role>, summary: &Summary) {
    header("📊 Dashboard");
    if let Some(role) = role {
        println!("Hello, {role}! Here's your mental health summary.");
    }

    let Some(average) = summary.display_average() else {
        println!("No data available yet.");
        return;
    };

    println!("📈 Average Stress Level: {average:.1}/10");
    println!("📊 Mood Distribution:");

    let total = summary.total_entries();
    for mood in MoodCategory::ALL {
        let Some(&count) = summary.mood_counts.get(&mood) else {
            continue;
        };
        let percentage = count_percentage(count, total);
        let bar_length = (*percentage / 100. * BAR_WIDTH as f64).round() as usize;
        println!(
            "{} {:>8} {:>4}  {}",
            mood.emoji(),
            mood.to_string(),
            format!("{}%", *percentage as i32),
            mood_colour(mood).paint("█".repeat(bar_length.max(1)))
        );
    }
}

fn mood_colour(mood: MoodCategory) -> Colour {
    match mood {
        MoodCategory::Happy => Colour::Green,
        MoodCategory::Neutral => Colour::White,
        MoodCategory::Sad => Colour::Blue,
        MoodCategory::Angry => Colour::Red,
        MoodCategory::Anxious => Colour::Yellow,
    }
}
