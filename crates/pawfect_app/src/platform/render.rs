use std::fmt::Write;

use pawfect_core::{AnimalCardView, CatalogViewModel, PhotoSource};

pub fn render_home(view: &CatalogViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Lives saved: {}", view.lives_saved);

    if let Some(card) = &view.highlighted {
        let _ = writeln!(out, "\nAnimal of the day");
        out.push_str(&render_card(card));
    }

    out.push('\n');
    out.push_str(&render_list("Meet our friends", &view.cards));

    if !view.success_stories.is_empty() {
        let _ = writeln!(out, "\nSuccess stories");
        for story in &view.success_stories {
            let _ = writeln!(out, "  {}: {}", story.title, story.text);
        }
    }
    out
}

pub fn render_list(title: &str, cards: &[AnimalCardView]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title} ({})", cards.len());
    if cards.is_empty() {
        let _ = writeln!(out, "  nothing to show");
    }
    for card in cards {
        out.push_str(&render_card(card));
    }
    out
}

pub fn render_card(card: &AnimalCardView) -> String {
    let heart = if card.favorite { " <3" } else { "" };
    let hurry = if card.near_deadline { " !" } else { "" };
    let photo = match &card.photo {
        PhotoSource::Remote(url) => url.to_string(),
        PhotoSource::Local(name) => format!("asset:{name}"),
        PhotoSource::Placeholder => "no photo".to_string(),
    };
    format!(
        "  {name}{heart} - {breed}, {age}y, {location}\n    {countdown}{hurry} [{urgency}/{color}] {summary}\n    id {id} ({photo})\n",
        name = card.name,
        breed = card.breed,
        age = card.age,
        location = card.location,
        countdown = card.countdown,
        urgency = card.urgency_level.label(),
        color = card.urgency_color,
        summary = card.summary,
        id = card.id,
    )
}
