//! Interactive sign-up form driven over stdin.
//!
//! Usage: `sparkform-demo [config.json]`. Logs go to `sparkform-demo.log`
//! (level from `SPARKFORM_LOG`, default `debug`).

mod command;
mod error;

use std::cell::RefCell;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;
use std::str::FromStr;

use simplelog::{Config, LevelFilter, WriteLogger};
use sparkform::prelude::*;

use command::{Command, HELP};
use error::DemoError;

const LOG_FILE: &str = "sparkform-demo.log";
const COUNTRIES: [&str; 4] = ["Brazil", "Portugal", "Spain", "Uruguay"];
/// Progress values fed to every scheduled label transition.
const ANIMATION_STEPS: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

type RepaintLog = Rc<RefCell<Vec<RepaintTarget>>>;

/// Queues label transitions; the main loop plays them after each command.
#[derive(Clone, Default)]
struct StepScheduler {
    pending: Rc<RefCell<Vec<(FieldId, AnimationTicket)>>>,
}

impl AnimationScheduler for StepScheduler {
    fn schedule(&mut self, field: FieldId, ticket: AnimationTicket) {
        log::debug!(
            "label animation for {} scheduled ({:?})",
            field,
            ticket.duration()
        );
        self.pending.borrow_mut().push((field, ticket));
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    init_logging()?;
    let config = load_config(env::args().nth(1))?;
    log::info!("starting with {:?}", config);

    let scheduler = StepScheduler::default();
    let repaints = RepaintLog::default();
    let mut form = signup_form(&config, scheduler.clone(), Rc::clone(&repaints));
    let submit = form.create_submit_button("Sign up", |form| {
        println!("submitting...");
        form.save();
    });

    println!("{}", HELP);
    print_form(&form, submit);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        let command = match Command::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match execute(&mut form, submit, command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(DemoError::Form(e)) => println!("error: {}", e),
            Err(e) => return Err(e),
        }

        play_animations(&mut form, &scheduler)?;
        let targets: Vec<RepaintTarget> = repaints.borrow_mut().drain(..).collect();
        if !targets.is_empty() {
            log::debug!("repaint requested for {:?}", targets);
            print_form(&form, submit);
        }
    }

    log::info!("bye");
    Ok(())
}

fn init_logging() -> Result<(), DemoError> {
    let level = env::var("SPARKFORM_LOG")
        .ok()
        .and_then(|value| LevelFilter::from_str(&value).ok())
        .unwrap_or(LevelFilter::Debug);
    let log_file = File::create(LOG_FILE)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

fn load_config(path: Option<String>) -> Result<FormConfig, DemoError> {
    let Some(path) = path else {
        return Ok(FormConfig::default());
    };
    let file = File::open(&path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| DemoError::Config { path, source })
}

fn signup_form(config: &FormConfig, scheduler: StepScheduler, repaints: RepaintLog) -> Form {
    let messages = &config.messages;

    Form::builder()
        .config(config)
        .field(
            TextFormField::new("Name", "")
                .hint("Your full name")
                .validator(Validator::not_empty(messages))
                .on_saved(print_saved("Name")),
        )
        .field(
            TextFormField::restricted("Email", "", InputRestriction::Email)
                .placeholder("you@example.com")
                .validator(Validator::email(messages))
                .on_saved(print_saved("Email")),
        )
        .field(
            TextFormField::password("Password", "")
                .hint("At least 8 characters")
                .validator(Validator::group([
                    Validator::not_empty(messages),
                    Validator::min_length(8, messages),
                ])),
        )
        .field(
            TextFormField::masked("Phone", "(999) 999-9999", "(555) 555-5555")
                .hint("Optional")
                .on_saved(print_saved("Phone")),
        )
        .field(
            SelectFormField::new("Country", "", COUNTRIES)
                .placeholder("Pick a country")
                .validator(Validator::not_empty(messages))
                .on_saved(print_saved("Country")),
        )
        .on_validation_changed(|valid| {
            println!("form is now {}", if valid { "valid" } else { "invalid" });
        })
        .repaint(move |target: RepaintTarget| repaints.borrow_mut().push(target))
        .scheduler(scheduler)
        .build()
}

fn print_saved(label: &'static str) -> impl FnMut(&str) + 'static {
    move |value| println!("saved {} = {:?}", label, value)
}

fn execute(form: &mut Form, submit: ButtonId, command: Command) -> Result<bool, DemoError> {
    match command {
        Command::Show => print_form(form, submit),
        Command::Help => println!("{}", HELP),
        Command::Focus(target) => match resolve(form, &target) {
            Some(id) => {
                if !form.focus(id)? {
                    println!("'{}' is disabled", target);
                }
            }
            None => println!("no field '{}'", target),
        },
        Command::Blur => form.blur(),
        Command::Next => {
            form.focus_next();
        }
        Command::Prev => {
            form.focus_prev();
        }
        Command::Type(text) => {
            if let Some(id) = focused(form) {
                form.type_text(id, &text)?;
            }
        }
        Command::Backspace => {
            if let Some(id) = focused(form) {
                form.backspace(id)?;
            }
        }
        Command::Set(text) => {
            if let Some(id) = focused(form) {
                form.set_text(id, &text)?;
            }
        }
        Command::Select(option) => {
            if let Some(id) = focused(form) {
                form.set_selected(id, &option)?;
            }
        }
        Command::Clear => {
            if let Some(id) = focused(form) {
                form.set_text(id, "")?;
            }
        }
        Command::Reset => form.reset(),
        Command::Submit => {
            if !form.tap_button(submit)? {
                println!("the form has errors; the submit button is disabled");
            }
        }
        Command::Save => form.save(),
        Command::Valid => println!("valid: {}", form.is_valid()),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Field by label, or by 1-based position.
fn resolve(form: &Form, target: &str) -> Option<FieldId> {
    if let Ok(position) = target.parse::<usize>() {
        return form.field_ids().nth(position.checked_sub(1)?);
    }
    form.find(target)
}

fn focused(form: &Form) -> Option<FieldId> {
    let id = form.focused();
    if id.is_none() {
        println!("no field has focus; use 'focus <label>' or 'tab'");
    }
    id
}

fn play_animations(form: &mut Form, scheduler: &StepScheduler) -> Result<(), DemoError> {
    let pending: Vec<(FieldId, AnimationTicket)> =
        scheduler.pending.borrow_mut().drain(..).collect();
    for (id, ticket) in pending {
        for progress in ANIMATION_STEPS {
            if !form.tick_label(id, &ticket, progress)? {
                log::trace!("ticket for {} went stale at {}", id, progress);
                break;
            }
        }
    }
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

fn print_form(form: &Form, submit: ButtonId) {
    println!();
    for (index, field) in form.fields().iter().enumerate() {
        print_field(index, field);
    }
    if let Ok(button) = form.button(submit) {
        let state = if button.is_enabled() { "enabled" } else { "disabled" };
        println!("    [{}] ({})", button.label(), state);
    }
    println!();
}

fn print_field(index: usize, field: &FormField) {
    let p = field.presentation();
    let cursor = if p.focused { '>' } else { ' ' };
    let label = match p.label_phase.target() {
        LabelEndpoint::Stacked => format!("{}:", p.label),
        LabelEndpoint::Inline => format!("({})", p.label),
    };
    let value = match &p.placeholder {
        Some(placeholder) => format!("<{}>", placeholder),
        None => p.value.clone(),
    };
    let hint = if p.error_visible {
        format!("! {}", p.hint)
    } else {
        p.hint.clone()
    };
    let disabled = if p.disabled { " [disabled]" } else { "" };

    println!(
        "{} {}. {:<12} {:<24} {}{}",
        cursor,
        index + 1,
        label,
        value,
        hint,
        disabled
    );
    if let Some(select) = field.as_select() {
        println!("       options: {}", select.options().join(", "));
    }
}
