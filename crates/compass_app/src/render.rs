//! Plain-text rendering of the view models. Presentation only: everything
//! printed here comes from an `AppState::view()` snapshot.

use compass_core::{ConversationView, MarketTipsView, RecommendationsView, Sector, Speaker};

pub fn help() {
    println!("commands:");
    println!("  sector <name>   fetch tips for a sector ({})", sector_names());
    println!("  prefs <text>    set general preferences");
    println!("  skills <text>   set key skills");
    println!("  details <text>  set detailed expectations");
    println!("  find            submit the recommendation query");
    println!("  say <text>      send a chat message to the mentor");
    println!("  help            show this message");
    println!("  quit            exit");
}

fn sector_names() -> String {
    Sector::ALL
        .into_iter()
        .map(Sector::name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn tips(view: &MarketTipsView) {
    println!("-- market tips [{}] --", view.sector);
    if view.loading {
        println!("Loading tips...");
        return;
    }
    if let Some(error) = &view.error {
        println!("Unable to fetch market trends: {error}");
        return;
    }
    if view.no_tips {
        println!("No career tips available for the selected sector.");
        return;
    }
    for tip in &view.tips {
        println!("* {}", tip.title);
        println!("  {}", tip.description);
    }
}

pub fn jobs(view: &RecommendationsView) {
    println!("-- job recommendations --");
    if view.loading {
        println!("Searching for jobs...");
        return;
    }
    if let Some(error) = &view.error {
        println!("Error: {error}");
        return;
    }
    if view.no_results {
        println!("No recommendations found matching your criteria.");
        println!("Try adjusting your preferences, skills, or detailed expectations.");
        return;
    }
    for job in &view.jobs {
        println!("* {} at {}", job.title, job.company);
        if let Some(notes) = &job.relevance_notes {
            println!("  Why it might be a fit: {notes}");
        }
        println!("  {}", job.short_description);
        if !job.skills.is_empty() {
            println!("  Skills: {}", job.skills.join(", "));
        }
        if let Some(url) = &job.url {
            println!("  {url}");
        }
    }
}

pub fn chat(view: &ConversationView) {
    println!("-- mentor chat --");
    for entry in &view.transcript {
        let speaker = match entry.speaker {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        };
        println!("{speaker}: {}", entry.text);
    }
    if view.sending {
        println!("Bot: ...");
    }
}
