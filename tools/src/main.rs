//! provia-runner: headless driver for the Provia profile core.
//!
//! Usage:
//!   provia-runner --db provia.db
//!   provia-runner --db provia.db --questions data/questions.json --ipc-mode
//!
//! In IPC mode every stdin line is one JSON command and every reply is
//! one JSON line on stdout, so a presentation layer can run on top.

use anyhow::Result;
use provia_core::{
    config::ProviaConfig,
    content::{leaderboard, levels, opponents, schedule, DayTopic, Level, QuestionBank},
    rng::ContentRng,
    rules::MockEligibility,
    store::SqliteKv,
    types::{Day, Percent},
    Profile, ProfileStore, ProfileUpdate,
};
use serde_json::{json, Value};
use std::env;
use std::io::{self, BufRead, Write};

type Store = ProfileStore<SqliteKv>;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    CompleteDay { day: Day, score: Percent },
    StartMockTest,
    CompleteMockTest { score: Percent },
    Update { fields: ProfileUpdate },
    Topic { day: Day },
    DayQuestions { day: Day },
    MockQuestions { count: Option<usize> },
    Opponents,
    RandomOpponent,
    RecordBattle { won: bool },
    UnlockAchievement { id: String },
    Leaderboard,
    Reset,
    Quit,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct UiState {
    profile:               Profile,
    cooldown_remaining_ms: u64,
    countdown:             String,
    current_topic:         DayTopic,
    mock_status:           MockEligibility,
    needs_onboarding:      bool,
    level:                 &'static Level,
    level_progress:        u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let questions_path = flag_value(&args, "--questions").unwrap_or("./data/questions.json");

    let config = match flag_value(&args, "--config") {
        Some(path) => ProviaConfig::load(path)?,
        None => ProviaConfig::default(),
    };
    let key = flag_value(&args, "--key")
        .map(str::to_string)
        .unwrap_or_else(|| config.profile_key.clone());

    let mut rng = match flag_value(&args, "--seed").and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => ContentRng::seeded(seed),
        None => ContentRng::from_entropy(),
    };
    log::debug!("Content RNG seed: {}", rng.seed());

    let bank = QuestionBank::load(questions_path).unwrap_or_else(|e| {
        log::warn!("No question bank loaded: {e}");
        QuestionBank::default()
    });

    let kv = if db == ":memory:" {
        SqliteKv::in_memory()?
    } else {
        SqliteKv::open(db)?
    };
    let store = ProfileStore::with_key(kv, provia_core::clock::SystemClock, config, key);

    if ipc_mode {
        run_ipc_loop(&store, &bank, &mut rng, io::stdin().lock(), io::stdout().lock())?;
    } else {
        println!("Provia runner");
        println!("  db:        {db}");
        println!("  key:       {}", store.key());
        println!("  questions: {} loaded", bank.len());
        println!();
        print_summary(&store)?;
    }

    Ok(())
}

fn run_ipc_loop(
    store:      &Store,
    bank:       &QuestionBank,
    rng:        &mut ContentRng,
    mut input:  impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                writeln!(output, "{}", json!({ "error": e.to_string() }))?;
                output.flush()?;
                continue;
            }
        };

        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        writeln!(output, "{}", reply_for(store, bank, rng, cmd))?;
        output.flush()?;
    }
    Ok(())
}

/// Any failure, including reading back the state, becomes an error reply.
fn reply_for(store: &Store, bank: &QuestionBank, rng: &mut ContentRng, cmd: IpcCommand) -> Value {
    let outcome = handle_command(store, bank, rng, cmd)
        .and_then(|result| Ok((result, build_ui_state(store)?)));
    match outcome {
        Ok((result, state)) => json!({ "result": result, "state": state }),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

fn handle_command(
    store: &Store,
    bank:  &QuestionBank,
    rng:   &mut ContentRng,
    cmd:   IpcCommand,
) -> Result<Value> {
    let result = match cmd {
        IpcCommand::GetState | IpcCommand::Quit => Value::Null,
        IpcCommand::CompleteDay { day, score } => {
            let total_days = store.config().roadmap.total_days;
            if !(1..=total_days).contains(&day) || !store.load()?.is_day_unlocked(day) {
                anyhow::bail!("Day {day} is locked");
            }
            if store.is_day_locked_by_cooldown(day)? {
                anyhow::bail!("Day {day} is on cooldown");
            }
            serde_json::to_value(store.complete_day(day, score)?)?
        }
        IpcCommand::StartMockTest => {
            // The store does not gate the debit; the caller does.
            let profile = store.load()?;
            let status = store.can_take_mock_test(&profile);
            if !status.can_take {
                anyhow::bail!(status.reason);
            }
            store.start_mock_test(&profile)?;
            let count = store.config().mock_test.question_count;
            serde_json::to_value(bank.sample(count, rng))?
        }
        IpcCommand::CompleteMockTest { score } => {
            serde_json::to_value(store.complete_mock_test(score)?)?
        }
        IpcCommand::Update { fields } => serde_json::to_value(store.update(fields)?)?,
        IpcCommand::Topic { day } => serde_json::to_value(schedule::topic_for_day(day))?,
        IpcCommand::DayQuestions { day } => serde_json::to_value(bank.questions_for_day(day))?,
        IpcCommand::MockQuestions { count } => {
            let count = count.unwrap_or(store.config().mock_test.question_count);
            serde_json::to_value(bank.sample(count, rng))?
        }
        IpcCommand::Opponents => serde_json::to_value(opponents::roster())?,
        IpcCommand::RandomOpponent => serde_json::to_value(opponents::random_online(rng))?,
        IpcCommand::RecordBattle { won } => {
            let earned = store.config().battle.reward_for(won);
            serde_json::to_value(store.record_battle(won, earned)?)?
        }
        IpcCommand::UnlockAchievement { id } => json!({ "newlyUnlocked": store.unlock_achievement(&id)? }),
        IpcCommand::Leaderboard => serde_json::to_value(leaderboard::leaderboard(&store.load()?))?,
        IpcCommand::Reset => {
            store.reset()?;
            Value::Null
        }
    };
    Ok(result)
}

fn build_ui_state(store: &Store) -> Result<UiState> {
    let profile = store.load()?;
    let cooldown_remaining_ms = store.cooldown_remaining()?;
    Ok(UiState {
        cooldown_remaining_ms,
        countdown: format_countdown(cooldown_remaining_ms),
        current_topic: schedule::topic_for_day(profile.current_day),
        mock_status: store.can_take_mock_test(&profile),
        needs_onboarding: profile.needs_onboarding(),
        level: Level::for_credits(profile.hero_credits),
        level_progress: levels::progress_percent(profile.hero_credits),
        profile,
    })
}

fn print_summary(store: &Store) -> Result<()> {
    let profile = store.load()?;
    let total_days = store.config().roadmap.total_days;
    let topic = schedule::topic_for_day(profile.current_day);
    let mock = store.can_take_mock_test(&profile);
    let board = leaderboard::leaderboard(&profile);

    println!("=== PROFILE SUMMARY ===");
    println!("  name:           {}", profile.display_name);
    println!("  territory:      {}", profile.territory.as_deref().unwrap_or("(not set)"));
    println!("  days completed: {}/{total_days}", profile.completed_days.len());
    if profile.is_roadmap_complete(total_days) {
        println!("  next day:       roadmap complete");
    } else {
        println!("  next day:       {} ({})", profile.current_day, topic.topic);
    }
    let level = Level::for_credits(profile.hero_credits);
    println!("  hero credits:   {}", profile.hero_credits);
    println!("  level:          {} {} (Lv.{})", level.badge, level.title, level.level);
    println!("  streak:         {}", profile.streak_count);
    println!("  battles:        {}W / {}P", profile.battles_won, profile.battles_played);
    println!("  mock tests:     {} taken, {}", profile.mock_tests_taken, mock.reason);
    if let Some(rank) = leaderboard::current_user_rank(&board) {
        println!("  leaderboard:    #{rank} of {}", board.len());
    }

    let remaining = store.cooldown_remaining()?;
    if remaining > 0 {
        println!(
            "  cooldown:       {} (day {})",
            format_countdown(remaining),
            profile.last_failed_day.unwrap_or_default()
        );
    }
    Ok(())
}

/// m:ss, as shown on the cooldown screen.
fn format_countdown(ms: u64) -> String {
    let mins = ms / 60_000;
    let secs = (ms % 60_000) / 1000;
    format!("{mins}:{secs:02}")
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
