use std::sync::Arc;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use tracing::{error, info, warn};

use crate::{
    cli::args::*,
    models::{
        cart::{AddToCartRequest, Size as ModelSize, EXTRAS, MILK_TYPES, TEMPERATURES},
        loyalty::MemberStats,
        menu::CoffeeItem,
        mood::Mood,
        order::{OrderStatus, PaymentMethod},
        table::Table,
    },
    services::{
        ArScanner, CartService, LoyaltyService, NfcReader, PaymentProcessor,
        RecommendationService, SimulationError,
    },
    session::SessionState,
    store::{CatalogStore, InMemoryCatalogStore},
    utils::{
        config::Config,
        formatting::{
            format_cart_table, format_loyalty, format_menu_table, format_money, format_moods,
            format_order_confirmation, format_origin_detail, format_recommendations,
            format_rooms, format_tables, format_taste_profile,
        },
        validation::is_valid_table_number,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static COFFEE: Emoji<'_, '_> = Emoji("☕ ", "");
static CAMERA: Emoji<'_, '_> = Emoji("📸 ", "");
static PHONE: Emoji<'_, '_> = Emoji("📱 ", "");
static BRAIN: Emoji<'_, '_> = Emoji("🧠 ", "");

const KIOSK_ACTIONS: [&str; 12] = [
    "Choose mood",
    "Browse menu",
    "AI flavor recommendations",
    "Mood rooms",
    "AR origin scan",
    "Smart table check-in",
    "View cart",
    "Checkout",
    "Order status",
    "Rewards",
    "Start over",
    "Exit",
];

pub struct CliApp {
    store: Arc<dyn CatalogStore>,
    cart_service: CartService,
    recommendation_service: RecommendationService,
    loyalty_service: LoyaltyService,
    ar_scanner: ArScanner,
    nfc_reader: NfcReader,
    payment_processor: PaymentProcessor,
}

/// Parse a `--mood` value. Unknown tags are reported and treated as no mood.
fn parse_mood_arg(tag: Option<&str>) -> Option<Mood> {
    let tag = tag?;
    let mood = Mood::parse(tag);
    if mood.is_none() {
        warn!("Unrecognized mood '{}', showing everything", tag);
        println!(
            "{} Unknown mood '{}'; choose one of: {}",
            WARNING,
            style(tag).yellow(),
            Mood::ALL.map(|m| m.tag()).join(", ")
        );
    }
    mood
}

impl CliApp {
    pub fn new(config: &Config) -> Self {
        let store: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalogStore::new());

        Self {
            cart_service: CartService::new(store.clone()),
            recommendation_service: RecommendationService::new(store.clone(), config.ai_delay),
            loyalty_service: LoyaltyService::new(),
            ar_scanner: ArScanner::new(store.clone(), config.ar_delay),
            nfc_reader: NfcReader::new(store.clone(), config.nfc_delay),
            payment_processor: PaymentProcessor::new(config.payment_delay),
            store,
        }
    }

    pub async fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Menu { mood, json } => self.handle_menu(mood, json).await,
            Commands::Recommend { mood, json, profile } => {
                self.handle_recommend(mood, json, profile).await
            }
            Commands::Rooms { mood } => self.handle_rooms(mood).await,
            Commands::Tables => self.handle_tables(None).await,
            Commands::Origin { id } => self.handle_origin(id.as_deref()).await.map(|_| ()),
            Commands::Checkin { table } => self.handle_checkin(table.as_deref(), None).await,
            Commands::Loyalty => self.handle_loyalty(),
            Commands::Quote {
                item,
                size,
                milk,
                temperature,
                extras,
                quantity,
            } => {
                let mut request = AddToCartRequest::new(&item)
                    .with_size(size.into())
                    .with_milk(&milk)
                    .with_temperature(&temperature)
                    .with_quantity(quantity);
                request.extras = extras;
                self.handle_quote(request).await
            }
            Commands::Kiosk => self.run_kiosk().await,
        }
    }

    async fn menu_for(&self, mood: Option<Mood>) -> Vec<CoffeeItem> {
        let menu = self.store.menu().await;
        match mood {
            Some(mood) => menu.into_iter().filter(|item| item.matches_mood(mood)).collect(),
            None => menu,
        }
    }

    async fn handle_menu(&self, mood: Option<String>, json: bool) -> Result<()> {
        let mood = parse_mood_arg(mood.as_deref());
        let items = self.menu_for(mood).await;

        if json {
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        let heading = match mood {
            Some(mood) => format!("Perfect for your {} mood", mood),
            None => "Our Signature Blends".to_string(),
        };
        println!("{} {}", COFFEE, style(heading).bold().cyan());
        if items.is_empty() {
            println!("{} No blends match this mood", INFO);
        } else {
            println!("{}", format_menu_table(&items));
        }
        Ok(())
    }

    async fn handle_recommend(&self, mood: Option<String>, json: bool, profile: bool) -> Result<()> {
        let mood = parse_mood_arg(mood.as_deref());

        if profile && !json {
            println!("{}", style("Your Taste Profile").bold().cyan());
            println!("{}", format_taste_profile(self.recommendation_service.profile()));
        }

        if let Some(mood) = mood {
            println!(
                "{} {} Mode Active: optimizing recommendations for your {} state",
                BRAIN,
                style(mood.display_name()).bold(),
                mood
            );
        }
        println!("{} AI processing your preferences...", BRAIN);

        match self.recommendation_service.recommend(mood, |_| {}).await {
            Ok(ranked) if json => {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            }
            Ok(ranked) => {
                println!("{}", style("Personalized Recommendations").bold().cyan());
                print!("{}", format_recommendations(&ranked));
            }
            Err(e) => {
                println!("{} Recommendation failed: {}", CROSS, style(&e).red());
                error!("Recommendation failed: {}", e);
            }
        }
        Ok(())
    }

    async fn handle_rooms(&self, mood: Option<String>) -> Result<()> {
        let mood = parse_mood_arg(mood.as_deref());
        let rooms: Vec<_> = self
            .store
            .rooms()
            .await
            .into_iter()
            .filter(|room| mood.map(|m| room.matches_mood(m)).unwrap_or(true))
            .collect();

        println!("{}", style("Curated Spaces for Your Mood").bold().cyan());
        print!("{}", format_rooms(&rooms, mood));
        Ok(())
    }

    async fn handle_tables(&self, selected: Option<&str>) -> Result<()> {
        let tables = self.store.tables().await;
        println!("{}", style("Lounge Tables").bold().cyan());
        println!("{}", format_tables(&tables, selected));
        Ok(())
    }

    async fn handle_origin(&self, id: Option<&str>) -> Result<bool> {
        println!("{} Analyzing coffee card and fetching origin data...", CAMERA);

        match self
            .ar_scanner
            .scan(id, |origin| {
                info!("AR scan complete: discovered the story behind {}", origin.name)
            })
            .await
        {
            Ok(origin) => {
                println!("{} AR Scan Complete!", CHECKMARK);
                println!("{}", format_origin_detail(&origin));
                Ok(true)
            }
            Err(e) => {
                println!("{} AR scan failed: {}", CROSS, style(&e).red());
                error!("AR scan failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn tagged_table(&self, number: &str) -> Option<Table> {
        let number = number.trim().to_uppercase();
        if !is_valid_table_number(&number) {
            println!("{} '{}' is not a table tag (expected something like B2)", CROSS, number);
            return None;
        }

        match self.store.find_table(&number).await {
            Ok(table) if table.available => Some(table),
            Ok(table) => {
                println!("{} Table {} is occupied", WARNING, table.number);
                None
            }
            Err(e) => {
                println!("{} {}", CROSS, style(&e).red());
                error!("Table lookup failed: {}", e);
                None
            }
        }
    }

    /// Scan for a table, or read the given tag; seat the guest when a session is given and they confirm.
    async fn handle_checkin(
        &self,
        tag: Option<&str>,
        session: Option<&mut SessionState>,
    ) -> Result<()> {
        println!("{} Hold your phone near the table's NFC tag...", PHONE);

        let scanned = match tag {
            Some(number) => match self.tagged_table(number).await {
                Some(table) => Ok(table),
                None => return Ok(()),
            },
            None => self.nfc_reader.scan(|_| {}).await,
        };

        let table = match scanned {
            Ok(table) => table,
            Err(SimulationError::NoTableAvailable) => {
                println!("{} Every table is occupied right now", WARNING);
                return Ok(());
            }
            Err(e) => {
                println!("{} NFC scan failed: {}", CROSS, style(&e).red());
                error!("NFC scan failed: {}", e);
                return Ok(());
            }
        };

        println!("{} NFC Tag Detected!", CHECKMARK);
        println!("Table: {}", style(&table.number).cyan().bold());
        println!("Section: {}", table.section);
        println!("Capacity: {} seats", table.capacity);
        println!("Ambience: {}", style(&table.ambience).dim());

        if let Some(session) = session {
            let confirm = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Confirm & sit here?")
                .default(true)
                .interact()?;
            if confirm {
                session.select_table(&table);
                println!(
                    "{} You're now seated at table {}. Your orders will be delivered here automatically.",
                    CHECKMARK,
                    style(&table.number).green()
                );
            }
        }
        Ok(())
    }

    fn handle_loyalty(&self) -> Result<()> {
        let summary = self.loyalty_service.summary(MemberStats::demo());
        println!("{}", style("Your Aura Journey").bold().cyan());
        println!("{}", format_loyalty(&summary, self.loyalty_service.tiers()));
        Ok(())
    }

    async fn handle_quote(&self, request: AddToCartRequest) -> Result<()> {
        match self.cart_service.build_line(request).await {
            Ok(line) => {
                println!("{} {}", COFFEE, style(&line.name).bold().cyan());
                println!("Options: {} • {} • {}", line.size, line.milk, line.temperature);
                if !line.extras.is_empty() {
                    println!("Extras: {} ({})", line.extras.join(", "), format_money(line.extras_price()));
                }
                println!("Each: {}", style(format_money(line.unit_price())).yellow());
                println!(
                    "Total for {}: {}",
                    line.quantity,
                    style(format_money(line.line_total())).green().bold()
                );
            }
            Err(e) => {
                println!("{} Failed to price drink: {}", CROSS, style(&e).red());
                error!("Failed to price drink: {}", e);
            }
        }
        Ok(())
    }

    // Kiosk
    async fn run_kiosk(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let mut session = SessionState::new();

        println!("{} {}", COFFEE, style("Welcome to Aura Coffee Lounge").bold().cyan());
        info!("Kiosk session started");

        loop {
            let mut prompt = String::from("What would you like to do?");
            if let Some(mood) = session.selected_mood() {
                prompt = format!("[{} mode] {}", mood.display_name(), prompt);
            }
            if !session.cart().is_empty() {
                prompt = format!("{} (cart: {})", prompt, session.cart().item_count());
            }

            let choice = Select::with_theme(&theme)
                .with_prompt(prompt)
                .items(&KIOSK_ACTIONS)
                .default(0)
                .interact()?;

            match KIOSK_ACTIONS[choice] {
                "Choose mood" => self.kiosk_choose_mood(&mut session)?,
                "Browse menu" => self.kiosk_browse_menu(&mut session).await?,
                "AI flavor recommendations" => self.kiosk_recommend(&mut session).await?,
                "Mood rooms" => self.kiosk_rooms(&session).await?,
                "AR origin scan" => self.kiosk_ar_scan().await?,
                "Smart table check-in" => self.kiosk_table(&mut session).await?,
                "View cart" => self.kiosk_cart(&mut session)?,
                "Checkout" => self.kiosk_checkout(&mut session).await?,
                "Order status" => self.kiosk_order_status(&mut session)?,
                "Rewards" => self.handle_loyalty()?,
                "Start over" => {
                    session.go_home();
                    println!("{} Session reset", INFO);
                }
                _ => break,
            }
            println!();
        }

        info!("Kiosk session ended");
        Ok(())
    }

    fn kiosk_choose_mood(&self, session: &mut SessionState) -> Result<()> {
        println!("{}", style("How are you feeling today?").bold().cyan());
        print!("{}", format_moods(session.selected_mood()));

        let labels: Vec<String> = Mood::ALL
            .iter()
            .map(|m| format!("{} - {}", m.display_name(), m.description()))
            .collect();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Mood")
            .items(&labels)
            .default(0)
            .interact()?;

        let mood = Mood::ALL[choice];
        session.select_mood(mood);
        println!(
            "{} {} mood selected. We're curating the perfect experience for you.",
            CHECKMARK,
            style(mood.display_name()).green()
        );
        Ok(())
    }

    /// Ask for size, milk, temperature, extras and quantity for a product.
    fn prompt_customization(&self, product_id: &str) -> Result<AddToCartRequest> {
        let theme = ColorfulTheme::default();

        let size_labels: Vec<String> = ModelSize::ALL
            .iter()
            .map(|s| format!("{} (+{})", s.name(), format_money(s.upcharge())))
            .collect();
        let size = Select::with_theme(&theme)
            .with_prompt("Size")
            .items(&size_labels)
            .default(1)
            .interact()?;

        let milk = Select::with_theme(&theme)
            .with_prompt("Milk")
            .items(&MILK_TYPES)
            .default(0)
            .interact()?;

        let temperature = Select::with_theme(&theme)
            .with_prompt("Temperature")
            .items(&TEMPERATURES)
            .default(0)
            .interact()?;

        let extra_labels: Vec<String> = EXTRAS
            .iter()
            .map(|(name, price)| format!("{} (+{})", name, format_money(*price)))
            .collect();
        let extras = MultiSelect::with_theme(&theme)
            .with_prompt("Extras (space to toggle)")
            .items(&extra_labels)
            .interact()?;

        let quantity: u32 = Input::with_theme(&theme)
            .with_prompt("Quantity")
            .default(1)
            .validate_with(|input: &u32| -> Result<(), &str> {
                if (1..=20).contains(input) {
                    Ok(())
                } else {
                    Err("Quantity must be between 1 and 20")
                }
            })
            .interact_text()?;

        let mut request = AddToCartRequest::new(product_id)
            .with_size(ModelSize::ALL[size])
            .with_milk(MILK_TYPES[milk])
            .with_temperature(TEMPERATURES[temperature])
            .with_quantity(quantity);
        for index in extras {
            request = request.with_extra(EXTRAS[index].0);
        }
        Ok(request)
    }

    async fn kiosk_browse_menu(&self, session: &mut SessionState) -> Result<()> {
        let items = self.menu_for(session.selected_mood()).await;
        if items.is_empty() {
            println!("{} No blends match this mood", INFO);
            return Ok(());
        }
        println!("{}", format_menu_table(&items));

        let mut labels: Vec<String> = items
            .iter()
            .map(|item| format!("{} ({})", item.name, format_money(item.price)))
            .collect();
        labels.push("Back".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Add to order")
            .items(&labels)
            .default(0)
            .interact()?;
        let Some(item) = items.get(choice) else {
            return Ok(());
        };

        let request = self.prompt_customization(&item.id)?;
        match self.cart_service.add_to_cart(session.cart_mut(), request).await {
            Ok(line) => {
                println!(
                    "{} {} has been added to your cart ({} each)",
                    CHECKMARK,
                    style(&line.name).green(),
                    format_money(line.unit_price())
                );
            }
            Err(e) => {
                println!("{} Failed to add item: {}", CROSS, style(&e).red());
                error!("Failed to add item: {}", e);
            }
        }
        Ok(())
    }

    async fn kiosk_recommend(&self, session: &mut SessionState) -> Result<()> {
        println!("{} AI processing your preferences...", BRAIN);
        let ranked = match self
            .recommendation_service
            .recommend(session.selected_mood(), |_| {})
            .await
        {
            Ok(ranked) => ranked,
            Err(e) => {
                println!("{} Recommendation failed: {}", CROSS, style(&e).red());
                error!("Recommendation failed: {}", e);
                return Ok(());
            }
        };
        print!("{}", format_recommendations(&ranked));

        let mut labels: Vec<String> = ranked
            .iter()
            .map(|c| format!("Try {} ({}% match)", c.name, c.match_score))
            .collect();
        labels.push("Back".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Try this blend?")
            .items(&labels)
            .default(0)
            .interact()?;
        if let Some(candidate) = ranked.get(choice) {
            let line = self.recommendation_service.to_line_item(candidate);
            session.add_to_cart(line);
            println!("{} {} has been added to your cart", CHECKMARK, style(&candidate.name).green());
        }
        Ok(())
    }

    async fn kiosk_rooms(&self, session: &SessionState) -> Result<()> {
        let mood = session.selected_mood();
        let rooms: Vec<_> = self
            .store
            .rooms()
            .await
            .into_iter()
            .filter(|room| mood.map(|m| room.matches_mood(m)).unwrap_or(true))
            .collect();
        print!("{}", format_rooms(&rooms, mood));

        let mut labels: Vec<String> = rooms
            .iter()
            .map(|room| {
                if room.available {
                    format!("Reserve {}", room.name)
                } else {
                    format!("{} (fully booked)", room.name)
                }
            })
            .collect();
        labels.push("Back".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Reserve a space")
            .items(&labels)
            .default(labels.len() - 1)
            .interact()?;
        match rooms.get(choice) {
            Some(room) if room.available => {
                println!("{} Your spot in {} has been reserved.", CHECKMARK, style(&room.name).green());
                info!("Room reserved: {}", room.name);
            }
            Some(room) => {
                println!("{} {} is fully booked", WARNING, room.name);
            }
            None => {}
        }
        Ok(())
    }

    async fn kiosk_ar_scan(&self) -> Result<()> {
        let menu = self.store.menu().await;
        let mut labels = vec!["Scan any coffee card".to_string()];
        labels.extend(menu.iter().map(|item| format!("Scan the {} card", item.name)));

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("AR scanner")
            .items(&labels)
            .default(0)
            .interact()?;
        let id = choice.checked_sub(1).and_then(|i| menu.get(i)).map(|item| item.id.as_str());

        self.handle_origin(id).await?;
        Ok(())
    }

    async fn kiosk_table(&self, session: &mut SessionState) -> Result<()> {
        self.handle_tables(session.selected_table()).await?;

        let options = ["Simulate NFC scan", "Pick a table", "Back"];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Smart table service")
            .items(&options)
            .default(0)
            .interact()?;

        match choice {
            0 => self.handle_checkin(None, Some(session)).await?,
            1 => {
                let available = self.store.available_tables().await;
                let labels: Vec<String> = available
                    .iter()
                    .map(|t| format!("{} - {} ({} seats)", t.number, t.section, t.capacity))
                    .collect();
                if labels.is_empty() {
                    println!("{} Every table is occupied right now", WARNING);
                    return Ok(());
                }
                let index = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Table")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let table = &available[index];
                session.select_table(table);
                println!("{} You're now seated at table {}", CHECKMARK, style(&table.number).green());
            }
            _ => {}
        }
        Ok(())
    }

    fn kiosk_cart(&self, session: &mut SessionState) -> Result<()> {
        loop {
            if session.cart().is_empty() {
                println!("{} Your cart is empty. Add some coffee to get started!", INFO);
                return Ok(());
            }
            println!("{}", format_cart_table(session.cart()));
            if let Some(table) = session.selected_table() {
                println!("Delivering to: {}", style(table).yellow());
            }

            let mut labels: Vec<String> = session
                .cart()
                .lines()
                .iter()
                .enumerate()
                .map(|(i, line)| format!("Edit #{} {}", i + 1, line.name))
                .collect();
            labels.push("Back".to_string());

            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Cart")
                .items(&labels)
                .default(labels.len() - 1)
                .interact()?;
            let Some(line_id) = session.cart().lines().get(choice).map(|line| line.id) else {
                return Ok(());
            };

            let actions = ["Add one", "Remove one", "Remove item"];
            let action = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Change")
                .items(&actions)
                .default(0)
                .interact()?;
            let cart = session.cart_mut();
            match action {
                0 => cart.increment(&line_id),
                1 => cart.decrement(&line_id),
                _ => {
                    cart.remove(&line_id);
                    println!("{} Item has been removed from your cart.", INFO);
                }
            }
        }
    }

    async fn kiosk_checkout(&self, session: &mut SessionState) -> Result<()> {
        if session.cart().is_empty() {
            println!("{} Your cart is empty. Add some coffee to get started!", INFO);
            return Ok(());
        }

        println!("{}", style("Checkout").bold().cyan());
        println!("{}", format_cart_table(session.cart()));
        if let Some(table) = session.selected_table() {
            println!("Delivering to: {}", style(table).yellow());
        }

        let theme = ColorfulTheme::default();
        let methods = [PaymentMethod::Card, PaymentMethod::Points];
        let labels = ["Card", "Points"];
        let method = Select::with_theme(&theme)
            .with_prompt("Payment method")
            .items(&labels)
            .default(0)
            .interact()?;

        let confirm = Confirm::with_theme(&theme)
            .with_prompt(format!("Pay {}?", format_money(session.cart().total())))
            .default(true)
            .interact()?;
        if !confirm {
            println!("Checkout cancelled");
            return Ok(());
        }

        println!("{} Processing payment...", INFO);
        let table = session.selected_table().map(str::to_string);
        let result = self
            .payment_processor
            .process(session.cart(), methods[method], table, |order| {
                info!("Order {} placed for {:.2}", order.id, order.total)
            })
            .await;

        match result {
            Ok(confirmation) => {
                println!("{} {}", CHECKMARK, style("Order Confirmed!").bold().green());
                println!("Your coffee is being crafted with love");
                println!("{}", format_order_confirmation(&confirmation));
                session.complete_order(confirmation);
            }
            Err(e) => {
                println!("{} Payment failed: {}", CROSS, style(&e).red());
                error!("Payment failed: {}", e);
            }
        }
        Ok(())
    }

    /// Show the order status. It only moves forward when the guest refreshes.
    fn kiosk_order_status(&self, session: &mut SessionState) -> Result<()> {
        let status = session.order_status();
        let Some(message) = status.message() else {
            println!("{} No active order", INFO);
            return Ok(());
        };

        println!("{} {}", INFO, style(message).bold());
        if let Some(table) = session.selected_table() {
            println!("Table {} • Smart delivery in progress", style(table).yellow());
        }
        if status == OrderStatus::Delivered {
            return Ok(());
        }

        let refresh = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Refresh status?")
            .default(false)
            .interact()?;
        if refresh {
            let now = session.advance_order();
            if let Some(message) = now.message() {
                println!("{} {}", INFO, style(message).bold());
            }
        }
        Ok(())
    }
}

/// Read configuration from `path` when given, otherwise from the environment.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path).context("Failed to load configuration file"),
        None => Config::from_env().context("Failed to load configuration"),
    }
}
