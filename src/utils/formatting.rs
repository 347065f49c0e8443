use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::{
    models::{
        cart::CartLineItem,
        loyalty::LoyaltyTier,
        menu::CoffeeItem,
        mood::Mood,
        order::OrderConfirmation,
        origin::CoffeeOrigin,
        recommendation::{CatalogItem, TasteProfile},
        room::MoodRoom,
        table::Table as LoungeTable,
    },
    services::{cart_service::Cart, loyalty_service::LoyaltySummary},
};

#[derive(Tabled)]
struct MenuRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Coffee")]
    name: String,
    #[tabled(rename = "Origin")]
    origin: String,
    #[tabled(rename = "Strength")]
    strength: String,
    #[tabled(rename = "Brew")]
    brew_time: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Options")]
    options: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Each")]
    each: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Table")]
    number: String,
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Seats")]
    capacity: u8,
    #[tabled(rename = "Ambience")]
    ambience: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Tier")]
    name: String,
    #[tabled(rename = "Points")]
    points: u32,
    #[tabled(rename = "Benefits")]
    benefits: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_moods(selected: Option<Mood>) -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        let marker = if selected == Some(mood) { "●" } else { "○" };
        output.push_str(&format!(
            "{} {:<10} {}\n",
            marker,
            style(mood.display_name()).bold(),
            style(mood.description()).dim()
        ));
    }
    output
}

pub fn format_menu_table(items: &[CoffeeItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows = items
        .iter()
        .map(|item| MenuRow {
            id: item.id.clone(),
            name: if item.featured {
                format!("{} ★", item.name)
            } else {
                item.name.clone()
            },
            origin: item.origin.clone(),
            strength: format!("{}{}", "●".repeat(item.strength as usize), "○".repeat(5 - item.strength.min(5) as usize)),
            brew_time: item.brew_time.clone(),
            rating: format!("{:.1}", item.rating),
            price: format_money(item.price),
        })
        .collect();

    render(rows)
}

fn line_options(line: &CartLineItem) -> String {
    let mut options = format!("{} • {} • {}", line.size, line.milk, line.temperature);
    if !line.extras.is_empty() {
        options.push_str(&format!(" + {}", line.extras.join(", ")));
    }
    options
}

pub fn format_cart_table(cart: &Cart) -> String {
    if cart.is_empty() {
        return String::new();
    }

    let rows = cart
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| CartRow {
            index: index + 1,
            name: line.name.clone(),
            options: line_options(line),
            quantity: line.quantity,
            each: format_money(line.unit_price()),
            total: format_money(line.line_total()),
        })
        .collect();

    let mut output = render(rows);
    output.push_str(&format!(
        "\n{}: {}",
        style("Total").bold(),
        style(format_money(cart.total())).green().bold()
    ));
    output
}

pub fn format_recommendations(items: &[CatalogItem]) -> String {
    let mut output = String::new();

    for (index, item) in items.iter().enumerate() {
        let badge = if index == 0 {
            style(" Best Match").yellow().bold().to_string()
        } else {
            String::new()
        };
        output.push_str(&format!(
            "{}{}  {}  {}\n",
            style(&item.name).bold().cyan(),
            badge,
            style(format!("{}% Match", item.match_score)).green(),
            style(format_money(item.price)).bold()
        ));
        output.push_str(&format!("  {}: {}\n", style("Origin").bold(), item.origin));
        for reason in &item.reasons {
            output.push_str(&format!("  ★ {}\n", style(reason).dim()));
        }
        output.push_str(&format!(
            "  {}: {}\n",
            style("Mood Enhancement").bold(),
            style(&item.mood_enhancement).italic()
        ));
        output.push_str(&format!(
            "  {}: {}\n\n",
            style("Taste Notes").bold(),
            item.taste_notes.join(", ")
        ));
    }

    output
}

pub fn format_taste_profile(profile: &TasteProfile) -> String {
    let mut output = String::new();
    for (label, value) in [
        ("Sweetness", profile.sweetness),
        ("Acidity", profile.acidity),
        ("Intensity", profile.intensity),
    ] {
        let filled = (value / 10) as usize;
        output.push_str(&format!(
            "{:<10} {}{} {}%\n",
            style(label).bold(),
            "█".repeat(filled),
            "░".repeat(10 - filled.min(10)),
            value
        ));
    }
    output.push_str(&format!(
        "{}: {}\n",
        style("Preferred Flavors").bold(),
        profile.flavor_notes.join(", ")
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Milk Preferences").bold(),
        profile.milk_preference.join(", ")
    ));
    output
}

pub fn format_tables(tables: &[LoungeTable], selected: Option<&str>) -> String {
    let rows = tables
        .iter()
        .map(|table| TableRow {
            number: if selected == Some(table.number.as_str()) {
                format!("{} (you)", table.number)
            } else {
                table.number.clone()
            },
            section: table.section.clone(),
            capacity: table.capacity,
            ambience: table.ambience.clone(),
            status: if table.available {
                style("Available").green().to_string()
            } else {
                style("Occupied").red().to_string()
            },
        })
        .collect();

    render(rows)
}

pub fn format_rooms(rooms: &[MoodRoom], mood: Option<Mood>) -> String {
    let mut output = String::new();

    for room in rooms {
        let recommended = mood.map(|m| room.matches_mood(m)).unwrap_or(false);
        output.push_str(&format!("{}", style(&room.name).bold().cyan()));
        if recommended {
            output.push_str(&format!(" {}", style("Recommended").yellow()));
        }
        let status = if room.available {
            style("Available").green()
        } else {
            style("Reserved").red()
        };
        output.push_str(&format!("  {} seats  {}\n", room.capacity, status));
        output.push_str(&format!("  {}\n", style(&room.description).dim()));
        output.push_str(&format!("  Ambience: {}\n", room.ambience));
        output.push_str(&format!("  Scent: {}\n", room.scent));
        output.push_str(&format!("  Lighting: {}\n", room.lighting));
        output.push_str(&format!("  Sounds: {}\n", room.sounds));
        output.push_str(&format!("  Features: {}\n\n", room.features.join(", ")));
    }

    output
}

pub fn format_origin_detail(origin: &CoffeeOrigin) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}  {}\n",
        style(&origin.name).bold().cyan(),
        style(format!("Sustainability: {}%", origin.sustainability_score)).green()
    ));
    output.push_str(&format!("{}\n\n", style(&origin.story).dim()));
    output.push_str(&format!("{}: {}\n", style("Farm").bold(), origin.farm));
    output.push_str(&format!("{}: {}\n", style("Location").bold(), origin.location));
    output.push_str(&format!("{}: {}\n", style("Elevation").bold(), origin.elevation));
    output.push_str(&format!("{}: {}\n", style("Climate").bold(), origin.climate));
    output.push_str(&format!("{}: {}\n", style("Processing").bold(), origin.processing));
    output.push_str(&format!("{}: {}\n", style("Harvest").bold(), origin.harvest_season));
    output.push_str(&format!("{}: {}\n", style("Farmer").bold(), origin.farmer));
    if let Some(roast_date) = origin.roast_date {
        output.push_str(&format!("{}: {}\n", style("Roasted").bold(), roast_date.format("%Y-%m-%d")));
    }
    output.push_str(&format!("{}: {} days\n", style("Journey").bold(), origin.journey_days));
    output.push_str(&format!(
        "{}: {}\n",
        style("Flavor Profile").bold(),
        origin.flavor_profile.join(", ")
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Certifications").bold(),
        origin.certifications.join(", ")
    ));

    output
}

pub fn format_loyalty(summary: &LoyaltySummary, tiers: &[LoyaltyTier]) -> String {
    let mut output = String::new();
    let member = &summary.member;

    output.push_str(&format!(
        "Welcome back, {}\n",
        style(&member.name).bold().green()
    ));
    output.push_str(&format!("Your favorite mood: {}\n", member.favorite_mood));
    output.push_str(&format!(
        "{}: {} ({} points)\n",
        style("Current Tier").bold(),
        style(&summary.current_tier.name).cyan(),
        member.points
    ));
    if let (Some(next), Some(remaining)) = (&summary.next_tier, summary.points_to_next) {
        output.push_str(&format!(
            "{} points to {} ({:.0}%)\n",
            remaining, next.name, summary.progress_percent
        ));
    }
    output.push_str(&format!(
        "Visits: {}  Lifetime Spent: {}  Free Drinks Earned: {}\n\n",
        member.total_visits,
        format_money(member.lifetime_spent),
        summary.free_drinks
    ));

    let rows = tiers
        .iter()
        .enumerate()
        .map(|(index, tier)| TierRow {
            name: if index == summary.tier_index {
                format!("{} (current)", tier.name)
            } else {
                tier.name.clone()
            },
            points: tier.points_required,
            benefits: tier.benefits.join(", "),
        })
        .collect();
    output.push_str(&render(rows));

    if !summary.redeemable.is_empty() {
        output.push_str(&format!("\n{}:\n", style("Available Rewards").bold()));
        for reward in &summary.redeemable {
            output.push_str(&format!("  {} ({} points)\n", reward.name, reward.points_cost));
        }
    }

    output
}

pub fn format_order_confirmation(order: &OrderConfirmation) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Order").bold(), style(order.id).cyan()));
    output.push_str(&format!("{}: {}\n", style("Placed").bold(), style(format_date(&order.placed_at)).dim()));
    for line in &order.lines {
        output.push_str(&format!(
            "  {}x {} ({})  {}\n",
            line.quantity,
            line.name,
            line.size,
            format_money(line.line_total())
        ));
    }
    output.push_str(&format!(
        "{}: {}  via {}\n",
        style("Total").bold(),
        style(format_money(order.total)).green().bold(),
        order.payment_method
    ));
    output.push_str(&format!("Estimated time: {}\n", order.estimated_wait));
    if let Some(table) = &order.table {
        output.push_str(&format!("Delivering to: {}\n", style(table).yellow()));
    }

    output
}
