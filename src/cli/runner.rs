//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PagerArgs};
use crate::config::PaginationConfig;
use crate::controller::{ChangeEvent, PaginationController, QuickJumpAction, Transition};
use crate::error::{Error, Result};
use crate::snapshot::PaginationSnapshot;
use crate::window::PageMarker;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

/// One parsed walk action
#[derive(Debug, Clone, PartialEq, Eq)]
enum WalkAction {
    Next,
    Prev,
    JumpBack,
    JumpForward,
    GoTo(i64),
    Size(u32),
    Input(String),
    Submit,
    StepBack,
    StepForward,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Render { pager } => self.render(pager),
            Commands::Walk { pager, actions } => self.walk(pager, actions),
        }
    }

    fn build_controller(&self, args: &PagerArgs) -> Result<PaginationController> {
        let config = PaginationConfig::new(args.total)
            .with_current(args.current)
            .with_page_size(args.page_size)
            .with_show_less_items(args.show_less_items)
            .with_simple_mode(args.simple);
        PaginationController::new(config)
    }

    fn render(&self, args: &PagerArgs) -> Result<()> {
        let pager = self.build_controller(args)?;
        self.print_snapshot(&pager.snapshot())
    }

    fn walk(&self, args: &PagerArgs, script: &str) -> Result<()> {
        let actions = parse_actions(script)?;
        let mut pager = self.build_controller(args)?;

        self.print_snapshot(&pager.snapshot())?;
        for action in actions {
            if let Some(transition) = apply_action(&mut pager, &action) {
                self.print_transition(&transition)?;
            }
            self.print_snapshot(&pager.snapshot())?;
        }
        Ok(())
    }

    fn print_snapshot(&self, snapshot: &PaginationSnapshot) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
            OutputFormat::Pretty => {
                println!("{}", format_strip(snapshot));
                if self.cli.verbose || matches!(self.cli.command, Commands::Render { .. }) {
                    println!("{}", format_summary(snapshot));
                }
            }
        }
        Ok(())
    }

    fn print_transition(&self, transition: &Transition) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(transition)?),
            OutputFormat::Pretty => println!("{}", format_transition(transition)),
        }
        Ok(())
    }
}

// ============================================================================
// Action Script
// ============================================================================

fn parse_actions(script: &str) -> Result<Vec<WalkAction>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_action)
        .collect()
}

fn parse_action(part: &str) -> Result<WalkAction> {
    if let Some((name, arg)) = part.split_once('=') {
        return match name {
            "goto" => arg.parse().map(WalkAction::GoTo).map_err(|_| {
                Error::action_argument("goto", format!("expected a page number, got '{arg}'"))
            }),
            "size" => arg.parse().map(WalkAction::Size).map_err(|_| {
                Error::action_argument("size", format!("expected a page size, got '{arg}'"))
            }),
            "input" => Ok(WalkAction::Input(arg.to_string())),
            _ => Err(Error::unknown_action(part)),
        };
    }

    match part {
        "next" => Ok(WalkAction::Next),
        "prev" => Ok(WalkAction::Prev),
        "jump-back" => Ok(WalkAction::JumpBack),
        "jump-forward" => Ok(WalkAction::JumpForward),
        "submit" => Ok(WalkAction::Submit),
        "step-back" => Ok(WalkAction::StepBack),
        "step-forward" => Ok(WalkAction::StepForward),
        _ => Err(Error::unknown_action(part)),
    }
}

/// Apply one action; `Input` edits the buffer and yields no transition
fn apply_action(pager: &mut PaginationController, action: &WalkAction) -> Option<Transition> {
    match action {
        WalkAction::Next => Some(pager.next()),
        WalkAction::Prev => Some(pager.prev()),
        WalkAction::JumpBack => Some(pager.jump_backward()),
        WalkAction::JumpForward => Some(pager.jump_forward()),
        WalkAction::GoTo(page) => Some(pager.go_to(*page)),
        WalkAction::Size(size) => Some(pager.set_page_size(*size)),
        WalkAction::Input(text) => {
            pager.set_quick_jump_input(text);
            None
        }
        WalkAction::Submit => Some(pager.apply_quick_jump(QuickJumpAction::Submit)),
        WalkAction::StepBack => Some(pager.apply_quick_jump(QuickJumpAction::StepBack)),
        WalkAction::StepForward => Some(pager.apply_quick_jump(QuickJumpAction::StepForward)),
    }
}

// ============================================================================
// Pretty Formatting
// ============================================================================

/// Text strip for a snapshot, e.g. `« 1 … 8 9 [10] 11 12 … 20 »`
fn format_strip(snapshot: &PaginationSnapshot) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(snapshot.markers.len() + 2);
    let prev = if snapshot.has_prev { "«" } else { "·" };
    parts.push(prev.to_string());

    if snapshot.simple {
        parts.push(snapshot.simple_echo.clone());
    } else {
        for marker in &snapshot.markers {
            parts.push(match marker {
                PageMarker::Page {
                    number,
                    active: true,
                    ..
                } => format!("[{number}]"),
                PageMarker::Page { number, .. } => number.to_string(),
                PageMarker::JumpBackward | PageMarker::JumpForward => "…".to_string(),
            });
        }
    }

    let next = if snapshot.has_next { "»" } else { "·" };
    parts.push(next.to_string());
    parts.join(" ")
}

fn format_summary(snapshot: &PaginationSnapshot) -> String {
    let items = match snapshot.item_range {
        Some(range) => format!(
            "items {}-{} of {}",
            range.start, range.end, snapshot.total_items
        ),
        None => "no items".to_string(),
    };
    format!(
        "page {} of {} (size {}), {}",
        snapshot.current_page, snapshot.total_pages, snapshot.page_size, items
    )
}

fn format_transition(transition: &Transition) -> String {
    match transition.event {
        Some(ChangeEvent::PageChanged { page, page_size }) => {
            format!("-> page changed to {page} (size {page_size})")
        }
        Some(ChangeEvent::PageSizeChanged { page, page_size }) => {
            format!("-> page size changed to {page_size} (page {page})")
        }
        None => "-> no change".to_string(),
    }
}
