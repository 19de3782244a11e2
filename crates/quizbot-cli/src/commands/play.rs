//! The `quizbot play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;

use quizbot_core::filter::{available_values, filter_questions, resolve_facet, FacetChoice};
use quizbot_core::model::{Difficulty, Question, QuestionBank, SelectionFilter};
use quizbot_core::parser::parse_question_file;
use quizbot_core::report::build_score_record;
use quizbot_core::session::{grade_one, prepare_session, session_rng, GradeOutcome, ScoreResult};
use quizbot_core::traits::{Clock, ScoreSink, SystemClock};
use quizbot_report::JsonlScoreLog;

/// Command-line arguments for `play`.
pub struct PlayArgs {
    pub questions: Option<PathBuf>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub no_shuffle: bool,
    pub seed: Option<u64>,
    pub score_log: Option<PathBuf>,
    pub no_record: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = super::config_with_questions(args.questions, args.config.as_deref())?;

    let bank = parse_question_file(&config.questions)?;

    let mut log = JsonlScoreLog::new(args.score_log.unwrap_or(config.score_log));
    let sink: Option<&mut dyn ScoreSink> = if args.no_record || !config.record_scores {
        None
    } else {
        Some(&mut log)
    };

    let options = PlayOptions {
        category: args.category,
        difficulty: args.difficulty,
        shuffle: config.shuffle && !args.no_shuffle,
        seed: args.seed.or(config.seed),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let played = ConsoleQuiz::new(
        &bank,
        stdin.lock(),
        stdout.lock(),
        &options,
        sink,
        &SystemClock,
    )
    .run()?;

    tracing::info!("played {played} round(s)");
    Ok(())
}

/// Session settings that stay fixed across rounds.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Preset category; skips the category prompt.
    pub category: Option<String>,
    /// Preset difficulty; skips the difficulty prompt.
    pub difficulty: Option<String>,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

/// Interactive quiz loop over any line-based input and output.
pub struct ConsoleQuiz<'a, 's, R, W> {
    bank: &'a QuestionBank,
    input: R,
    out: W,
    options: &'a PlayOptions,
    sink: Option<&'s mut dyn ScoreSink>,
    clock: &'a dyn Clock,
    rng: StdRng,
    categories: Vec<String>,
    difficulties: Vec<String>,
}

impl<'a, 's, R: BufRead, W: Write> ConsoleQuiz<'a, 's, R, W> {
    pub fn new(
        bank: &'a QuestionBank,
        input: R,
        out: W,
        options: &'a PlayOptions,
        sink: Option<&'s mut dyn ScoreSink>,
        clock: &'a dyn Clock,
    ) -> Self {
        let (categories, difficulties) = available_values(bank);
        Self {
            bank,
            input,
            out,
            options,
            sink,
            clock,
            rng: session_rng(options.seed),
            categories,
            difficulties: difficulties
                .iter()
                .map(|d: &Difficulty| d.to_string())
                .collect(),
        }
    }

    /// Play rounds until the player declines another or input ends.
    /// Returns the number of completed rounds.
    pub fn run(&mut self) -> Result<usize> {
        writeln!(self.out, "quizbot: pick a category and difficulty, then answer away.")?;

        if self.bank.is_empty() {
            writeln!(self.out, "The question bank is empty. Nothing to play.")?;
            return Ok(0);
        }

        let mut completed = 0;
        loop {
            let Some(filter) = self.choose_filter()? else {
                break;
            };

            let selected = filter_questions(self.bank, &filter);
            if selected.is_empty() {
                writeln!(self.out, "No questions match those filters. Try again.")?;
                if self.options.category.is_some() && self.options.difficulty.is_some() {
                    anyhow::bail!("no questions match the --category/--difficulty given");
                }
                continue;
            }

            let Some(result) = self.play_round(&filter, selected)? else {
                break;
            };
            completed += 1;
            tracing::debug!(
                correct = result.correct,
                total = result.total_auto_graded,
                "round done"
            );

            write!(self.out, "\nPlay another set? (y/n): ")?;
            self.out.flush()?;
            match self.read_line()? {
                Some(again) if again.trim().eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }

        writeln!(self.out, "Bye!")?;
        Ok(completed)
    }

    /// Returns `None` when input ends before both facets are chosen.
    fn choose_filter(&mut self) -> Result<Option<SelectionFilter>> {
        let categories = self.categories.clone();
        let difficulties = self.difficulties.clone();

        writeln!(self.out, "\nAvailable categories: {}", categories.join(", "))?;
        let Some(category) =
            self.choose("category", self.options.category.clone(), &categories)?
        else {
            return Ok(None);
        };

        writeln!(self.out, "\nAvailable difficulties: {}", difficulties.join(", "))?;
        let Some(difficulty) =
            self.choose("difficulty", self.options.difficulty.clone(), &difficulties)?
        else {
            return Ok(None);
        };

        Ok(Some(SelectionFilter::new(category, difficulty)))
    }

    /// Resolve one facet from a preset or a prompt. The outer `Option` is
    /// `None` on end of input; the inner one is the filter value.
    fn choose(
        &mut self,
        facet: &str,
        preset: Option<String>,
        options: &[String],
    ) -> Result<Option<Option<String>>> {
        let input = match preset {
            Some(value) => value,
            None => {
                write!(self.out, "Pick {facet}: {} (Enter=ALL)\n> ", options.join("/"))?;
                self.out.flush()?;
                match self.read_line()? {
                    Some(line) => line,
                    None => return Ok(None),
                }
            }
        };

        let choice = resolve_facet(&input, options);
        if choice == FacetChoice::NoMatch {
            tracing::debug!(facet, input = input.trim(), "unmatched facet input");
            writeln!(self.out, "No match; using ALL.")?;
        }
        Ok(Some(choice.into_filter_value()))
    }

    /// Ask every question of one session. Returns `None` if input ends
    /// mid-round; the abandoned session is not scored.
    fn play_round(
        &mut self,
        filter: &SelectionFilter,
        selected: Vec<Question>,
    ) -> Result<Option<ScoreResult>> {
        let session = prepare_session(selected, self.options.shuffle, &mut self.rng);
        writeln!(self.out, "\nStarting quiz with {} question(s).", session.len())?;

        let mut outcomes = Vec::with_capacity(session.len());
        for q in session.questions() {
            write!(
                self.out,
                "\n[{} • {}] {}\n> ",
                q.category, q.difficulty, q.question
            )?;
            self.out.flush()?;

            let Some(reply) = self.read_line()? else {
                tracing::info!(session = %session.id, "input ended, session abandoned");
                return Ok(None);
            };

            let outcome = grade_one(q, &reply);
            match &outcome {
                GradeOutcome::OpenEnded => writeln!(self.out, "Thanks! (open-ended)")?,
                GradeOutcome::Correct => writeln!(self.out, "Correct!")?,
                GradeOutcome::Incorrect { expected } => {
                    writeln!(self.out, "Wrong. Correct answer: {expected}")?
                }
            }
            outcomes.push(outcome);
        }

        let result = ScoreResult::tally(&outcomes);
        writeln!(self.out, "\n-- Results --")?;
        writeln!(
            self.out,
            "Auto-graded score: {} / {}",
            result.correct, result.total_auto_graded
        )?;

        if let Some(sink) = self.sink.as_deref_mut() {
            let record = build_score_record(filter, &session, &result, self.clock);
            if let Err(e) = sink.append(&record) {
                tracing::warn!("failed to record score: {e:#}");
                writeln!(self.out, "(Could not save your score: {e})")?;
            }
        }

        Ok(Some(result))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
