use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use raylib::prelude::*;
use serde::Deserialize;

use crate::constants::*;

#[derive(Debug, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Deserialize)]
pub struct Slide {
    pub step: usize,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub content: SlideContent,
}

/// Closed catalog of slide types. Renderer selection matches exhaustively on
/// this, so an unrecognized type is a deserialization error at load time
/// rather than a silent runtime no-op.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SlideContent {
    Hero,
    List {
        items: Vec<String>,
    },
    IconCloud {
        icons: Vec<String>,
        #[serde(default = "default_cloud_count")]
        count: usize,
        #[serde(default = "default_icon_size")]
        icon_size: f32,
    },
    Text,
    KpiCards {
        cards: Vec<KpiCard>,
    },
    LineChart {
        #[serde(default)]
        label: String,
        historical: Vec<ChartPoint>,
        projection: Vec<ChartPoint>,
        #[serde(default = "default_y_cap")]
        y_cap: f64,
    },
    ScatteredImages {
        images: Vec<String>,
    },
    ImageGrid {
        images: Vec<String>,
        #[serde(default)]
        columns: Option<usize>,
    },
    ImageSingle {
        image: String,
    },
    TextWithDots,
    QuoteBubbles {
        quotes: Vec<Quote>,
    },
}

#[derive(Debug, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub emphasis: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChartPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct Quote {
    pub author: String,
    pub text: String,
}

fn default_cloud_count() -> usize {
    CLOUD_DEFAULT_COUNT
}

fn default_icon_size() -> f32 {
    CLOUD_DEFAULT_ICON_SIZE
}

fn default_y_cap() -> f64 {
    CHART_DEFAULT_Y_CAP
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read deck file {}", path.display()))?;
        let deck: Deck = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse deck file {}", path.display()))?;
        deck.validate()?;
        Ok(deck)
    }

    // Steps must be unique and dense from 0, in document order.
    fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            bail!("deck contains no slides");
        }
        for (position, slide) in self.slides.iter().enumerate() {
            if slide.step != position {
                bail!(
                    "slide steps must be dense from 0: slide at position {} has step {}",
                    position,
                    slide.step
                );
            }
        }
        Ok(())
    }

    pub fn slide(&self, step: usize) -> Option<&Slide> {
        self.slides.get(step)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Every image name the deck references, deduplicated, for asset preload.
    pub fn image_refs(&self) -> Vec<String> {
        let mut refs: Vec<String> = Vec::new();
        for slide in &self.slides {
            match &slide.content {
                SlideContent::ScatteredImages { images }
                | SlideContent::ImageGrid { images, .. } => {
                    refs.extend(images.iter().cloned());
                }
                SlideContent::ImageSingle { image } => refs.push(image.clone()),
                _ => {}
            }
        }
        refs.sort();
        refs.dedup();
        refs
    }
}

impl KpiCard {
    /// Accent color for the card; absent or malformed values fall back to gold.
    pub fn accent(&self) -> Color {
        self.color
            .as_deref()
            .and_then(color_from_hex)
            .unwrap_or(Color::GOLD)
    }
}

pub fn color_from_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color { r, g, b, a: 255 })
}
