use colored::Colorize;
use serde::Serialize;
use specfilter::api::{CmdMessage, ListedGroup, ListedItem, MessageLevel};
use specfilter::attributes::AttributeDef;
use specfilter::config::{SpecFilterConfig, CONFIG_KEYS};
use specfilter::error::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const INDEX_WIDTH: usize = 5;
const OUT_OF_STOCK_MARKER: &str = "✗";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_items(items: &[ListedItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }
    for listed in items {
        print_item(listed, "");
    }
}

pub(super) fn print_groups(groups: &[ListedGroup]) {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", group.label.bold());
        if group.items.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for listed in &group.items {
            print_item(listed, "  ");
        }
    }
}

fn print_item(listed: &ListedItem, indent: &str) {
    let item = &listed.item;
    let idx = format!("{:>width$}", format!("{}.", listed.index), width = INDEX_WIDTH - 1);
    let name = pad_to_width(&truncate_to_width(&item.name, NAME_WIDTH), NAME_WIDTH);
    let stock = if item.in_stock {
        " ".normal()
    } else {
        OUT_OF_STOCK_MARKER.red()
    };

    println!(
        "{}{} {} {} {:<7}{:<7}{}",
        indent,
        idx.yellow(),
        stock,
        name,
        item.color.as_str(),
        item.size.as_str(),
        item.tags.join(", ").dimmed()
    );
}

pub(super) fn print_attributes(defs: &[AttributeDef]) {
    for def in defs {
        let values = if def.values.is_empty() {
            String::new()
        } else {
            def.values.join(" | ")
        };
        println!(
            "  {} {:<6} {}",
            format!("{:<10}", def.name).bold(),
            def.kind.label(),
            values.dimmed()
        );
    }
}

pub(super) fn print_config(config: &SpecFilterConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Right-pad by display width, so wide characters line up.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
