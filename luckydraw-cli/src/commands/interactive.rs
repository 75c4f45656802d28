use crate::config::CliConfig;
use crate::i18n::Messages;
use crate::reveal::show_draw;
use anyhow::Result;
use dialoguer::{Confirm, Input};
use luckydraw_core::{eligible_count, DrawError, DrawRequest};

/// Answer to one participant slot prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAnswer {
    Name(String),
    /// Keep the slot but leave it empty; later slots keep their numbers.
    Blank,
    Done,
}

/// Prompt-driven draw: enter names slot by slot, pick the lots, draw, repeat.
pub async fn run_interactive(config: &CliConfig, messages: &Messages<'_>) -> Result<()> {
    println!("{}", messages.text("main_title"));
    println!("{}", messages.text("main_subtitle"));
    println!();
    println!("{}", messages.text("subheading"));
    println!();

    println!("{}", messages.text("participants_label"));
    let entries = collect_slots(|number| prompt_slot(number, messages))?;
    println!(
        "{}: {}",
        messages.text("participants_label"),
        eligible_count(&entries)
    );

    let schedule = config.reveal_schedule();

    loop {
        let lots = prompt_lots(config, messages)?;
        let request = DrawRequest::new(entries.iter().cloned(), config.winner_count(lots)?);

        match request.draw() {
            Ok(result) => show_draw(&result, &schedule, messages).await,
            Err(err @ DrawError::InsufficientParticipants { .. }) => {
                println!("{}", messages.draw_error(&err));
            }
            Err(err) => return Err(err.into()),
        }

        println!();
        let again = Confirm::new()
            .with_prompt(messages.text("draw_winners_btn"))
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Ask for slots 1, 2, ... until the answer is `Done`. Blank slots are kept
/// as empty entries.
pub fn collect_slots<F>(mut prompt: F) -> Result<Vec<String>>
where
    F: FnMut(usize) -> Result<SlotAnswer>,
{
    let mut entries = Vec::new();
    loop {
        match prompt(entries.len() + 1)? {
            SlotAnswer::Name(name) => entries.push(name),
            SlotAnswer::Blank => entries.push(String::new()),
            SlotAnswer::Done => break,
        }
    }
    Ok(entries)
}

/// An empty name asks whether to keep adding participants; yes leaves the
/// slot blank, no ends the list.
fn prompt_slot(number: usize, messages: &Messages<'_>) -> Result<SlotAnswer> {
    let name = Input::<String>::new()
        .with_prompt(messages.format("participant_placeholder", &[("number", number.to_string())]))
        .allow_empty(true)
        .interact_text()?;

    if !name.trim().is_empty() {
        return Ok(SlotAnswer::Name(name));
    }

    let keep_going = Confirm::new()
        .with_prompt(messages.text("add_participant_btn"))
        .default(false)
        .interact()?;

    Ok(if keep_going {
        SlotAnswer::Blank
    } else {
        SlotAnswer::Done
    })
}

fn prompt_lots(config: &CliConfig, messages: &Messages<'_>) -> Result<usize> {
    let (min, max) = (config.min_lots, config.max_lots);
    let lots = Input::<usize>::new()
        .with_prompt(messages.text("lots_label"))
        .default(min)
        .validate_with(move |lots: &usize| -> std::result::Result<(), String> {
            if (min..=max).contains(lots) {
                Ok(())
            } else {
                Err(messages.lots_out_of_range(min, max))
            }
        })
        .interact_text()?;

    Ok(lots)
}
