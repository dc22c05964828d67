//! Interactive question sequence that assembles a [`Comic`]
//!
//! Each [`Step`] asks one question and either accepts the answer, moving
//! the draft forward, or rejects it and falls back to the step named by
//! [`Step::on_reject`]. Rejecting the video answer sends the operator back
//! to the id question, so the directory, panels and video are collected
//! again as one unit.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::model::{Comic, Credits, Effect, Panel, VideoSource};
use super::panels::{attach_text, panels_from_images};
use super::video::{self, VideoScan};
use crate::error::FatalError;
use crate::listing::list_sorted;
use crate::prompt::Prompter;

const IMAGES_DIR: &str = "images";
const TEXT_DIR: &str = "text";
const VIDEO_DIR: &str = "video";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Name,
    Id,
    Panels,
    Video,
    Vtt,
    Effect,
    Artist,
    Website,
}

impl Step {
    /// Step to resume from after this step's answer is rejected
    pub fn on_reject(self) -> Step {
        match self {
            Step::Video => Step::Id,
            other => other,
        }
    }
}

/// Answers collected so far
#[derive(Debug, Default, Clone)]
pub struct ComicDraft {
    pub name: String,
    pub id: Option<String>,
    pub panels: Vec<Panel>,
    pub video: Vec<VideoSource>,
    pub vtt: Option<String>,
    pub effect: Option<Effect>,
    pub credits: Credits,
}

impl ComicDraft {
    fn finish(self) -> Result<Comic> {
        let id = self.id.context("Comic id was never answered")?;
        let effect = self.effect.context("Transition effect was never answered")?;

        Ok(Comic {
            id,
            name: self.name,
            panels_count: self.panels.len(),
            panels: self.panels,
            video: self.video,
            effect,
            credits: self.credits,
            vtt: self.vtt,
        })
    }
}

enum Outcome {
    /// Answer accepted; `None` once every question is answered
    Next(Option<Step>),
    Rejected,
}

/// Runs the question sequence against one comics root
pub struct ComicBuilder<'a, P> {
    prompter: &'a mut P,
    comics_root: &'a Path,
    vtt_pattern: &'a str,
}

impl<'a, P: Prompter> ComicBuilder<'a, P> {
    pub fn new(prompter: &'a mut P, comics_root: &'a Path, vtt_pattern: &'a str) -> Self {
        Self {
            prompter,
            comics_root,
            vtt_pattern,
        }
    }

    /// Ask every question in order and return the finished record
    pub fn run(mut self) -> Result<Comic> {
        let mut draft = ComicDraft::default();
        let mut step = Some(Step::Name);

        while let Some(current) = step {
            let (next_draft, outcome) = self.ask(current, draft)?;
            draft = next_draft;
            step = match outcome {
                Outcome::Next(next) => next,
                Outcome::Rejected => {
                    let retry = current.on_reject();
                    debug!(?current, ?retry, "answer rejected");
                    Some(retry)
                }
            };
        }

        draft.finish()
    }

    fn ask(&mut self, step: Step, draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        match step {
            Step::Name => self.ask_name(draft),
            Step::Id => self.ask_id(draft),
            Step::Panels => self.ask_panels(draft),
            Step::Video => self.ask_video(draft),
            Step::Vtt => self.ask_vtt(draft),
            Step::Effect => self.ask_effect(draft),
            Step::Artist => self.ask_artist(draft),
            Step::Website => self.ask_website(draft),
        }
    }

    fn comic_dir(&self, draft: &ComicDraft) -> Result<PathBuf> {
        let id = draft.id.as_deref().context("Comic id is not set")?;
        Ok(self.comics_root.join(id))
    }

    fn ask_name(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        draft.name = self.prompter.ask("What's the name of the comic?")?;
        Ok((draft, Outcome::Next(Some(Step::Id))))
    }

    fn ask_id(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        let answer = self.prompter.ask(&format!(
            "What's the name of the comic directory in {}?",
            self.comics_root.display()
        ))?;
        let answer = answer.trim().to_string();
        let dir = self.comics_root.join(&answer);
        self.prompter.info(&dir.display().to_string())?;

        if !is_single_dir_name(&answer) || !dir.is_dir() {
            self.prompter.warn(&format!(
                "The requested directory doesn't exist in {}: {}. Please try again.",
                self.comics_root.display(),
                answer
            ))?;
            return Ok((draft, Outcome::Rejected));
        }

        if !dir.join(IMAGES_DIR).is_dir() {
            self.prompter.warn(&format!(
                "The requested directory doesn't contain a directory called images: {}. Please try again.",
                answer
            ))?;
            return Ok((draft, Outcome::Rejected));
        }

        draft.id = Some(answer);
        Ok((draft, Outcome::Next(Some(Step::Panels))))
    }

    fn ask_panels(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        let dir = self.comic_dir(&draft)?;
        let mut panels = panels_from_images(list_sorted(&dir.join(IMAGES_DIR))?);

        let has_text = self.prompter.ask_yes_no(&format!(
            "Does the comic have text images in {}?",
            dir.join(TEXT_DIR).display()
        ))?;

        match has_text {
            None => return Ok((draft, Outcome::Rejected)),
            Some(false) => {}
            Some(true) => {
                let text_dir = dir.join(TEXT_DIR);
                if !text_dir.is_dir() {
                    return Err(FatalError::TextDirMissing(text_dir).into());
                }
                let text_files = list_sorted(&text_dir)?;
                attach_text(&mut panels, &text_files)?;
            }
        }

        debug!(count = panels.len(), "collected panels");
        draft.panels = panels;
        Ok((draft, Outcome::Next(Some(Step::Video))))
    }

    fn ask_video(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        let dir = self.comic_dir(&draft)?;
        let id = draft.id.clone().unwrap_or_default();

        let has_video = self.prompter.ask_yes_no(&format!(
            "Does the comic have a video version in {}?",
            dir.join(VIDEO_DIR).display()
        ))?;

        match has_video {
            None => Ok((draft, Outcome::Rejected)),
            Some(false) => {
                draft.video = Vec::new();
                draft.vtt = None;
                Ok((draft, Outcome::Next(Some(Step::Effect))))
            }
            Some(true) => match video::scan(&dir.join(VIDEO_DIR))? {
                VideoScan::Found(sources) => {
                    draft.video = sources;
                    Ok((draft, Outcome::Next(Some(Step::Vtt))))
                }
                problem => {
                    if let Some(msg) = problem.problem(&id) {
                        self.prompter.warn(&msg)?;
                    }
                    Ok((draft, Outcome::Rejected))
                }
            },
        }
    }

    fn ask_vtt(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        let video_dir = self.comic_dir(&draft)?.join(VIDEO_DIR);

        let has_vtt = self.prompter.ask_yes_no(&format!(
            "Do you have a VTT file with timecodes for each panel to switch correctly between video and panels and is it inside {}?",
            video_dir.display()
        ))?;

        match has_vtt {
            None => Ok((draft, Outcome::Rejected)),
            Some(false) => {
                draft.vtt = None;
                Ok((draft, Outcome::Next(Some(Step::Effect))))
            }
            Some(true) => match video::find_vtt(&video_dir, self.vtt_pattern)? {
                Some(file) => {
                    draft.vtt = Some(file);
                    Ok((draft, Outcome::Next(Some(Step::Effect))))
                }
                None => {
                    self.prompter.warn(
                        "The video directory doesn't contain a vtt file. Please put it inside first.",
                    )?;
                    Ok((draft, Outcome::Rejected))
                }
            },
        }
    }

    fn ask_effect(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        let answer = self.prompter.ask(
            "As transition between slides, do you want a fade or slide effect?\n(fade/slide): ",
        )?;

        match answer.parse::<Effect>() {
            Ok(effect) => {
                draft.effect = Some(effect);
                Ok((draft, Outcome::Next(Some(Step::Artist))))
            }
            Err(_) => {
                self.prompter
                    .warn("Wrong input. Please choose fade or slide.")?;
                Ok((draft, Outcome::Rejected))
            }
        }
    }

    fn ask_artist(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        draft.credits.artist = self.prompter.ask("What's the artist's name?")?;
        Ok((draft, Outcome::Next(Some(Step::Website))))
    }

    fn ask_website(&mut self, mut draft: ComicDraft) -> Result<(ComicDraft, Outcome)> {
        draft.credits.website = self
            .prompter
            .ask("What's the artist's website (format: www.***.**)?")?;
        Ok((draft, Outcome::Next(None)))
    }
}

/// A plain directory name: no separators, no `.`/`..`, not empty
fn is_single_dir_name(answer: &str) -> bool {
    let mut components = Path::new(answer).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
