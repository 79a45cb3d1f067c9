use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quickcards_estimator::prelude::*;
use quickcards_estimator::render::format_money;
use quickcards_estimator::{
    parse_card_count, parse_price, DeckLoader, EstimatorConfig, DECK_SIZE_OPTIONS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};

mod logger;
mod widgets;
use widgets::*;

const DEFAULT_CONFIG_PATH: &str = "~/.config/quickcards/config.json";
const INTERACTIVE_LOG_FILE: &str = "quickcards.log";

#[derive(Debug, Clone, PartialEq)]
pub enum PopupType {
    PricingDetails,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Size,
    Shuffle,
    DefinitionsFirst,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Topic,
        FormField::Size,
        FormField::Shuffle,
        FormField::DefinitionsFirst,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'v')]
    verbose: bool,

    /// Deck topic; estimates once and exits instead of opening the form
    #[arg(short = 't', long = "topic")]
    topic: Option<String>,

    /// Number of cards in the deck
    #[arg(short = 'n', long = "cards", default_value = "0", allow_negative_numbers = true)]
    cards: String,

    #[arg(short = 's', long = "shuffle")]
    shuffle: bool,

    /// Price per card, e.g. 0.25; with --deck-file, applies to decks without their own price
    #[arg(short = 'p', long = "price")]
    price: Option<String>,

    /// Print the estimate as JSON
    #[arg(long = "json")]
    json: bool,

    /// Estimate every deck in a JSON Lines file or directory
    #[arg(short = 'f', long = "deck-file")]
    deck_file: Option<PathBuf>,

    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Write the effective configuration back to the config file
    #[arg(long = "save-config")]
    save_config: bool,
}

fn get_config_path(config: Option<&str>) -> PathBuf {
    let raw = config.unwrap_or(DEFAULT_CONFIG_PATH);
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

fn load_config(config_path: &Path) -> Result<EstimatorConfig> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        EstimatorConfig::from_json(&content)
            .with_context(|| format!("Invalid config: {}", config_path.display()))
    } else {
        Ok(EstimatorConfig::default())
    }
}

fn save_config(config_path: &Path, config: &EstimatorConfig) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    Ok(())
}

#[derive(Serialize)]
struct EstimateOutput<'a> {
    topic: &'a str,
    shuffle: bool,
    estimate: &'a Estimate,
}

fn print_estimate(topic: &str, shuffle: bool, estimate: &Estimate, json: bool) -> Result<()> {
    if json {
        let output = EstimateOutput {
            topic: topic.trim(),
            shuffle,
            estimate,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if estimate.is_empty() {
        println!("Nothing to estimate: enter a topic and choose a deck size.");
        return Ok(());
    }

    println!("{}", render_summary(topic, estimate));
    println!("\nYour Study Sessions:");
    for line in render_session_lines(estimate) {
        println!("  {}", line);
    }

    Ok(())
}

fn run_once(
    estimator: &Estimator,
    args: &Args,
    topic: &str,
    price_per_card: Option<Decimal>,
) -> Result<()> {
    let card_count = parse_card_count(&args.cards)?;
    let mut request = DeckRequest::new(topic, card_count, args.shuffle);
    if let Some(price) = price_per_card {
        request = request.with_price_per_card(price);
    }

    let estimate = estimator.estimate(&request);
    info!(
        topic = request.trimmed_topic(),
        card_count,
        total = %estimate.total(),
        "estimated deck"
    );
    print_estimate(topic, args.shuffle, &estimate, args.json)
}

/// A deck's own price wins over the command-line one.
fn deck_request(deck: &Deck, price_override: Option<Decimal>) -> DeckRequest {
    match (deck.price_per_card(), price_override) {
        (None, Some(price)) => deck.to_request().with_price_per_card(price),
        _ => deck.to_request(),
    }
}

fn run_deck_file(
    estimator: &Estimator,
    path: &Path,
    json: bool,
    price_override: Option<Decimal>,
) -> Result<()> {
    let loader = DeckLoader::new();
    let decks = if path.is_dir() {
        loader.load_from_directory(path)?
    } else {
        loader.load_from_file(path)?
    };

    if decks.is_empty() {
        warn!(path = %path.display(), "no decks found");
        return Err(anyhow::anyhow!("No decks found in {}", path.display()));
    }

    info!(count = decks.len(), "loaded decks");

    for deck in &decks {
        let estimate = estimator.estimate(&deck_request(deck, price_override));
        if !json {
            println!("=== {} ({}) ===", deck.topic(), deck.created_at().format("%Y-%m-%d"));
        }
        print_estimate(deck.topic(), deck.shuffle(), &estimate, json)?;
        if !json {
            println!();
        }
    }

    Ok(())
}

pub struct AppState {
    pub estimator: Estimator,
    pub topic: String,
    pub size_choice: Option<usize>,
    pub shuffle: bool,
    pub definitions_first: bool,
    pub price_per_card: Option<Decimal>,
    pub focus: FormField,
    pub estimate: Estimate,
    pub last_update: DateTime<Utc>,
    pub active_popup: Option<PopupType>,
}

impl AppState {
    fn new(estimator: Estimator, price_per_card: Option<Decimal>) -> Self {
        let mut state = Self {
            estimator,
            topic: String::new(),
            size_choice: None,
            shuffle: false,
            definitions_first: false,
            price_per_card,
            focus: FormField::Topic,
            estimate: Estimate::empty(),
            last_update: Utc::now(),
            active_popup: None,
        };
        state.recalculate();
        state
    }

    pub fn card_count(&self) -> u32 {
        self.size_choice
            .and_then(|index| DECK_SIZE_OPTIONS.get(index).copied())
            .unwrap_or(0)
    }

    pub fn request(&self) -> DeckRequest {
        let request = DeckRequest::new(self.topic.clone(), self.card_count(), self.shuffle);
        match self.price_per_card {
            Some(price) => request.with_price_per_card(price),
            None => request,
        }
    }

    pub fn effective_price_per_card(&self) -> Decimal {
        self.price_per_card
            .unwrap_or(self.estimator.config().default_price_per_card)
    }

    pub fn seconds_per_card(&self) -> u32 {
        self.estimator.seconds_per_card(self.shuffle)
    }

    /// Runs after every edit, so the panels always show the latest input.
    fn recalculate(&mut self) {
        self.estimate = self.estimator.estimate(&self.request());
        self.last_update = Utc::now();
        debug!(
            card_count = self.estimate.card_count(),
            total = %format_money(self.estimate.total()),
            "recalculated"
        );
    }

    fn cycle_size(&mut self, forward: bool) {
        let options = DECK_SIZE_OPTIONS.len();
        self.size_choice = match (self.size_choice, forward) {
            (None, true) => Some(0),
            (None, false) => Some(options - 1),
            (Some(index), true) if index + 1 < options => Some(index + 1),
            (Some(index), false) if index > 0 => Some(index - 1),
            _ => None,
        };
        self.recalculate();
    }

    fn toggle_focused(&mut self) {
        match self.focus {
            FormField::Shuffle => self.shuffle = !self.shuffle,
            FormField::DefinitionsFirst => self.definitions_first = !self.definitions_first,
            FormField::Size => return self.cycle_size(true),
            FormField::Topic => return,
        }
        self.recalculate();
    }

    fn push_topic_char(&mut self, c: char) {
        self.topic.push(c);
        self.recalculate();
    }

    fn pop_topic_char(&mut self) {
        if self.topic.pop().is_some() {
            self.recalculate();
        }
    }

    fn toggle_popup(&mut self, popup: PopupType) {
        self.active_popup = if self.active_popup.as_ref() == Some(&popup) {
            None
        } else {
            Some(popup)
        };
    }
}

pub struct App {
    state: AppState,
    exit: bool,
}

impl App {
    pub fn new(estimator: Estimator, price_per_card: Option<Decimal>) -> Self {
        Self {
            state: AppState::new(estimator, price_per_card),
            exit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut tick_interval = interval(Duration::from_millis(50));

        while !self.exit {
            tick_interval.tick().await;
            terminal.draw(|frame| self.draw(frame))?;

            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        let state = &self.state;
        HeaderWidget::render(frame, chunks[0], state);
        FormWidget::render(frame, chunks[1], state);
        EstimateWidget::render(frame, chunks[2], state);
        SessionsWidget::render(frame, chunks[3], state);
        ShortcutsWidget::render(frame, chunks[4], state);

        match &state.active_popup {
            Some(PopupType::PricingDetails) => PricingPopupWidget::render(frame, area, state),
            Some(PopupType::Help) => HelpPopupWidget::render(frame, area, state),
            None => {}
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key_event) = event {
            if key_event.kind == KeyEventKind::Press {
                self.handle_key(key_event);
            }
        }
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        let state = &mut self.state;

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.exit = true;
            return;
        }

        match key_event.code {
            KeyCode::Esc => {
                // Close any popup first, quit otherwise
                if state.active_popup.is_some() {
                    state.active_popup = None;
                } else {
                    self.exit = true;
                }
            }
            KeyCode::F(1) => state.toggle_popup(PopupType::Help),
            KeyCode::F(2) => state.toggle_popup(PopupType::PricingDetails),
            KeyCode::Tab | KeyCode::Down => state.focus = state.focus.next(),
            KeyCode::BackTab | KeyCode::Up => state.focus = state.focus.previous(),
            KeyCode::Left if state.focus == FormField::Size => state.cycle_size(false),
            KeyCode::Right if state.focus == FormField::Size => state.cycle_size(true),
            KeyCode::Backspace if state.focus == FormField::Topic => state.pop_topic_char(),
            KeyCode::Char(c) if state.focus == FormField::Topic => state.push_topic_char(c),
            KeyCode::Char(' ') | KeyCode::Enter => state.toggle_focused(),
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let interactive = args.topic.is_none() && args.deck_file.is_none();

    if interactive {
        if args.verbose {
            logger::init_file_logger(Path::new(INTERACTIVE_LOG_FILE))?;
        }
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config_path = get_config_path(args.config.as_deref());
    let mut config = load_config(&config_path)?;
    debug!(path = %config_path.display(), "loaded configuration");

    let price_override = args.price.as_deref().map(parse_price).transpose()?;

    if args.save_config {
        if let Some(price) = price_override {
            config.default_price_per_card = price;
        }
        if let Err(e) = save_config(&config_path, &config) {
            warn!(error = %e, "could not save config");
        } else {
            info!(path = %config_path.display(), "saved configuration");
        }
    }

    let estimator = Estimator::from_config(config)?;

    if let Some(path) = &args.deck_file {
        return run_deck_file(&estimator, path, args.json, price_override);
    }

    if let Some(topic) = &args.topic {
        return run_once(&estimator, &args, topic, price_override);
    }

    let mut terminal = ratatui::init();
    let mut app = App::new(estimator, price_override);

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
