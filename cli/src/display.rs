use chrono::{LocalResult, TimeZone, Utc};

use gallery_data::model::{ModelStatus, ModelSummary};

use heck::{ToKebabCase, ToTitleCase};

use vitrine::layout::{badge, Badge, Tile};

/// Web path of the model's detail page.
pub fn model_link(id: u64, name: &str) -> String {
    format!("models/{}/{}", id, name.to_kebab_case())
}

/// Shorten counts the way the web gallery does.
pub fn abbreviate(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }

    let (scaled, suffix) = if count < 1_000_000 {
        (count as f64 / 1_000.0, "k")
    } else {
        (count as f64 / 1_000_000.0, "m")
    };

    let rounded = format!("{:.1}", scaled);
    let rounded = rounded.strip_suffix(".0").unwrap_or(&rounded);

    format!("{}{}", rounded, suffix)
}

pub fn format_date(timestamp: i64) -> String {
    match Utc.timestamp_opt(timestamp, 0) {
        LocalResult::Single(date) => date.format("%b %d, %Y").to_string(),
        _ => timestamp.to_string(),
    }
}

/// One feed tile as a terminal line.
pub fn feed_line(
    index: usize,
    model: &ModelSummary,
    tile: &Tile,
    favorite: bool,
    now: i64,
) -> String {
    let mut line = format!(
        "{:>4} [{}px] {} <{}>",
        index + 1,
        tile.height,
        model.name,
        model.kind.to_string().to_title_case()
    );

    if model.status != ModelStatus::Published {
        line.push_str(&format!(" {}", model.status));
    }

    match badge(model.created_at, model.last_version_at, now) {
        Some(Badge::New) => line.push_str(" NEW"),
        Some(Badge::Updated) => line.push_str(" UPDATED"),
        None => {}
    }

    if model.nsfw {
        line.push_str(" NSFW");
    }

    let rank = &model.rank;

    line.push_str(&format!(
        " | by {} | ★{:.1} ({}) ⇣{}",
        model.user.username,
        rank.rating,
        abbreviate(rank.rating_count),
        abbreviate(rank.download_count)
    ));

    if rank.favorite_count > 0 {
        let heart = if favorite { "♥" } else { "♡" };

        line.push_str(&format!(" {}{}", heart, abbreviate(rank.favorite_count)));
    }

    if rank.comment_count > 0 {
        line.push_str(&format!(" 🗨{}", abbreviate(rank.comment_count)));
    }

    line.push_str(&format!(
        " | {} | {}",
        format_date(model.created_at),
        model_link(model.id, &model.name)
    ));

    line
}
