//! Interactive Demo - TUI Catalog Console
//!
//! Run: cargo run --example console_tui
//!
//! 默认在进程内启动一个 mock 目录服务；设置 CONCH_SERVER_URL 可接真实服务。

use conch_console::catalog::EditField;
use conch_console::{
    CatalogConsole, ConsoleConfig, ConsoleEvent, GuardState, NoticeLevel, SortDirection, SortKey,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

struct App {
    /// Input field state
    input: Input,
    /// Current input mode
    input_mode: InputMode,
    /// The console under demo
    console: CatalogConsole,
    /// Set once a redirect event arrives
    session_ended: bool,
    /// Logger widget state
    logger_state: TuiWidgetState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    #[default]
    Normal,
    Editing,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize TUI logger with tracing
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();

    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    // Without a configured server, run an in-process mock
    let mut config = ConsoleConfig::from_env();
    let mut _mock_handle = None;
    if std::env::var("CONCH_SERVER_URL").is_err() {
        let state = std::sync::Arc::new(conch_api_mock::AppState::with_seed());
        let (addr, handle) = conch_api_mock::spawn(state).await?;
        tracing::info!("In-process mock catalog on http://{}", addr);
        config.server_url = format!("http://{}", addr);
        _mock_handle = Some(handle);
    }
    if config.seller_id.is_none() {
        config.seller_id = Some("seller-001".to_string());
    }

    let mut console = CatalogConsole::new(&config);
    match console.start().await {
        Ok(GuardState::Verified) => tracing::info!("Session verified, catalog loaded"),
        Ok(_) => tracing::warn!("Session denied; catalog commands will fail"),
        Err(e) => tracing::error!("Startup failed: {}", e),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App {
        input: Input::default(),
        input_mode: InputMode::default(),
        console,
        session_ended: false,
        logger_state: TuiWidgetState::new(),
    };

    tracing::info!("Press 'e' to type commands, 'q' to quit, /help lists commands");
    tracing::info!("Use Up/Down/PgUp/PgDown to scroll logs");

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    app.console.shutdown();

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = Duration::from_millis(100);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        match app.input_mode {
                            InputMode::Normal => match key.code {
                                KeyCode::Char('e') => {
                                    app.input_mode = InputMode::Editing;
                                }
                                KeyCode::Char('q') | KeyCode::Esc => {
                                    return Ok(());
                                }
                                KeyCode::PageUp => {
                                    app.logger_state.transition(TuiWidgetEvent::PrevPageKey)
                                }
                                KeyCode::PageDown => {
                                    app.logger_state.transition(TuiWidgetEvent::NextPageKey)
                                }
                                KeyCode::Up => app.logger_state.transition(TuiWidgetEvent::UpKey),
                                KeyCode::Down => {
                                    app.logger_state.transition(TuiWidgetEvent::DownKey)
                                }
                                _ => {}
                            },
                            InputMode::Editing => match key.code {
                                KeyCode::Enter => {
                                    let input_str: String = app.input.value().into();
                                    if !input_str.is_empty() {
                                        handle_command(app, &input_str).await;
                                        app.input.reset();
                                    }
                                }
                                KeyCode::Esc => {
                                    app.input_mode = InputMode::Normal;
                                }
                                _ => {
                                    app.input.handle_event(&Event::Key(key));
                                }
                            },
                        }
                    }
                }
                _ => {}
            }
        }

        // Surface queued console events as log lines
        for event in app.console.drain_events() {
            match event {
                ConsoleEvent::Notice(notice) => match notice.level {
                    NoticeLevel::Info => tracing::info!("📢 {}", notice.message),
                    NoticeLevel::Error => tracing::error!("📢 {}", notice.message),
                },
                ConsoleEvent::RedirectToLogin => {
                    app.session_ended = true;
                    tracing::warn!("Session ended, press 'q' to quit");
                }
                ConsoleEvent::ReloadRequested => {
                    if let Err(e) = app.console.load().await {
                        tracing::error!("Reload failed: {}", e);
                    }
                }
            }
        }
    }
}

async fn handle_command(app: &mut App, cmd: &str) {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    if parts.is_empty() {
        return;
    }

    match parts[0] {
        "/help" => {
            tracing::info!("Available commands:");
            tracing::info!("  /reload                - Re-fetch the catalog");
            tracing::info!("  /sort <name|category|price|stock|sold>");
            tracing::info!("  /search [query]        - Filter by id or name, empty clears");
            tracing::info!("  /edit <id>             - Start editing a row");
            tracing::info!("  /set <field> <value>   - Change a buffered field");
            tracing::info!("  /save                  - Persist the edit");
            tracing::info!("  /cancel                - Drop the edit");
            tracing::info!("  /delete <id>           - Delete a row");
            tracing::info!("  /new <name>            - Open a draft with a fresh id");
            tracing::info!("  /img <path...>         - Select draft images");
            tracing::info!("  /submit                - Submit the draft");
            tracing::info!("  /logout                - End the seller session");
        }
        "/reload" => match app.console.load().await {
            Ok(()) => tracing::info!("✅ Catalog reloaded"),
            Err(e) => tracing::error!("❌ Reload failed: {}", e),
        },
        "/sort" => {
            let Some(key) = parts.get(1).and_then(|s| parse_sort_key(s)) else {
                tracing::error!("Usage: /sort <name|category|price|stock|sold>");
                return;
            };
            app.console.toggle_sort(key);
        }
        "/search" => {
            app.console.set_search_query(parts[1..].join(" "));
        }
        "/edit" => {
            let Some(id) = parts.get(1) else {
                tracing::error!("Usage: /edit <id>");
                return;
            };
            app.console.start_edit(id);
            if app.console.table().edit.is_editing() {
                tracing::info!("Editing {}, use /set then /save", id);
            }
        }
        "/set" => {
            if parts.len() < 3 {
                tracing::error!("Usage: /set <name|category|price|stock|sold|description> <value>");
                return;
            }
            let Some(field) = parse_edit_field(parts[1]) else {
                tracing::error!("Unknown field: {}", parts[1]);
                return;
            };
            app.console.edit_field(field, parts[2..].join(" "));
        }
        "/save" => match app.console.save_edit().await {
            Ok(()) => tracing::info!("✅ Row saved"),
            Err(e) => tracing::error!("❌ Save failed: {}", e),
        },
        "/cancel" => {
            app.console.cancel_edit();
        }
        "/delete" => {
            let Some(id) = parts.get(1) else {
                tracing::error!("Usage: /delete <id>");
                return;
            };
            if let Err(e) = app.console.delete(id).await {
                tracing::error!("❌ Delete failed: {}", e);
            }
        }
        "/new" => {
            if parts.len() < 2 {
                tracing::error!("Usage: /new <name>");
                return;
            }
            let draft = app.console.draft_mut();
            draft.open_dialog();
            draft.generate_id();
            draft.name = parts[1..].join(" ");
            tracing::info!("Draft {} opened for '{}'", draft.product_id, draft.name);
        }
        "/img" => {
            let paths: Vec<PathBuf> = parts[1..].iter().map(|s| PathBuf::from(*s)).collect();
            tracing::info!("Selected {} image(s)", paths.len());
            app.console.draft_mut().set_images(paths);
        }
        "/submit" => match app.console.submit_draft().await {
            Ok(()) => tracing::info!("✅ Product created"),
            Err(e) => tracing::error!("❌ Create failed: {}", e),
        },
        "/logout" => {
            if let Err(e) = app.console.logout().await {
                tracing::error!("❌ Logout failed: {}", e);
            }
        }
        _ => {
            tracing::warn!("Unknown command: {} (try /help)", parts[0]);
        }
    }
}

fn parse_sort_key(s: &str) -> Option<SortKey> {
    match s {
        "name" => Some(SortKey::Name),
        "category" => Some(SortKey::Category),
        "price" => Some(SortKey::Price),
        "stock" => Some(SortKey::InStock),
        "sold" => Some(SortKey::Sold),
        _ => None,
    }
}

fn parse_edit_field(s: &str) -> Option<EditField> {
    match s {
        "name" => Some(EditField::Name),
        "category" => Some(EditField::Category),
        "price" => Some(EditField::Price),
        "stock" => Some(EditField::InStock),
        "sold" => Some(EditField::Sold),
        "description" => Some(EditField::Description),
        _ => None,
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content (table + logs)
            Constraint::Length(3), // Input
        ])
        .split(f.area());

    // Split main content into the table (left) and logs (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Catalog table
            Constraint::Percentage(40), // Logs
        ])
        .split(chunks[1]);

    // Header
    let session_span = if app.session_ended {
        Span::styled(
            " Session ended ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        match app.console.guard_state() {
            GuardState::Verified => Span::styled(
                " Verified ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            GuardState::Denied => Span::styled(" Denied ", Style::default().fg(Color::Red)),
            GuardState::Unchecked => {
                Span::styled(" Unchecked ", Style::default().fg(Color::Yellow))
            }
        }
    };

    let title = Paragraph::new(vec![Line::from(vec![
        Span::raw(" 🐚 Conch Catalog Console "),
        Span::raw("| Seller: "),
        Span::styled(
            app.console.seller_id().unwrap_or("-"),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" |"),
        session_span,
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, chunks[0]);

    // Catalog table
    let rows_data = app.console.visible_rows();
    let editing_id = app.console.table().edit.editing_id().map(str::to_string);

    let header = Row::new(vec![
        "Id", "Name", "Category", "Price", "In", "Sold", "Rating",
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|p| {
            let style = if editing_id.as_deref() == Some(p.product_id.as_str()) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                p.product_id.clone(),
                p.name.clone(),
                p.category.clone(),
                format!("{:.2}", p.price),
                p.in_stock_value.to_string(),
                p.sold_stock_value.to_string(),
                format!("{:.1}", p.rating),
            ])
            .style(style)
        })
        .collect();

    let sort_label = match app.console.table().sort.key {
        Some(key) => {
            let arrow = match app.console.table().sort.direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            };
            format!("{:?} {}", key, arrow)
        }
        None => "fetch order".to_string(),
    };
    let search = &app.console.table().search_query;
    let table_title = if search.is_empty() {
        format!(" Catalog ({}) | sort: {} ", rows_data.len(), sort_label)
    } else {
        format!(
            " Catalog ({}) | sort: {} | search: {} ",
            rows_data.len(),
            sort_label,
            search
        )
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(table_title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(table, main_chunks[0]);

    // Logs (TuiLoggerWidget)
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, main_chunks[1]);

    // Input
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Command Input (Type /help) ");

    let style = match app.input_mode {
        InputMode::Normal => Style::default().fg(Color::Gray),
        InputMode::Editing => Style::default().fg(Color::Yellow),
    };

    let width = chunks[2].width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let input = Paragraph::new(app.input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(input_block);
    f.render_widget(input, chunks[2]);

    // Cursor
    if app.input_mode == InputMode::Editing {
        f.set_cursor_position((
            chunks[2].x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            chunks[2].y + 1,
        ));
    }

    // Help hint
    if app.input_mode == InputMode::Normal {
        let help_text = Paragraph::new("Press 'e' to edit, 'q' to quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        f.render_widget(help_text, chunks[0]);
    }
}
