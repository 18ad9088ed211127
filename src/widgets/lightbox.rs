use std::{ops::Sub, str::FromStr};

use serde::Serialize;
use tracing::{debug, warn};

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.5;
/// Zooming out to this level or below snaps the image back to center.
pub const PAN_RESET_ZOOM_THRESHOLD: f64 = 1.5;

#[derive(Serialize, Clone, Copy, PartialEq, Default, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OpenState {
    pub index: usize,
    pub zoom: f64,
    pub pan: Point,
    anchor: Point,
    pub dragging: bool,
    /// A real drag happened since the last `drag_start`.
    pub dragged: bool,
}

impl OpenState {
    fn at(index: usize) -> Self {
        Self {
            index,
            zoom: MIN_ZOOM,
            pan: Point::ORIGIN,
            anchor: Point::ORIGIN,
            dragging: false,
            dragged: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(OpenState),
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LightboxView {
    pub index: usize,
    pub counter: String,
    pub scale: f64,
    pub translate: Point,
    pub cursor: Cursor,
}

/// Modal image viewer over a gallery of `image_count` images.
#[derive(Clone, PartialEq, Debug)]
pub struct Lightbox {
    image_count: usize,
    state: LightboxState,
    scroll_locked: bool,
}

impl Lightbox {
    pub fn new(image_count: usize) -> Self {
        Self {
            image_count,
            state: LightboxState::Closed,
            scroll_locked: false,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// Whether the page behind the viewer must stay still.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn open(&mut self, initial_index: usize) {
        if self.image_count == 0 {
            warn!("refusing to open a lightbox with no images");
            return;
        }
        let index = initial_index.min(self.image_count - 1);
        self.state = LightboxState::Open(OpenState::at(index));
        self.scroll_locked = true;
        debug!(index, "lightbox opened");
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
        self.scroll_locked = false;
    }

    pub fn prev(&mut self) {
        let count = self.image_count;
        if let LightboxState::Open(open) = &mut self.state {
            *open = OpenState::at((open.index + count - 1) % count);
        }
    }

    pub fn next(&mut self) {
        let count = self.image_count;
        if let LightboxState::Open(open) = &mut self.state {
            *open = OpenState::at((open.index + 1) % count);
        }
    }

    pub fn zoom_in(&mut self) {
        if let LightboxState::Open(open) = &mut self.state {
            open.zoom = (open.zoom + ZOOM_STEP).min(MAX_ZOOM);
        }
    }

    pub fn zoom_out(&mut self) {
        if let LightboxState::Open(open) = &mut self.state {
            open.zoom = (open.zoom - ZOOM_STEP).max(MIN_ZOOM);
            if open.zoom <= PAN_RESET_ZOOM_THRESHOLD {
                open.pan = Point::ORIGIN;
            }
        }
    }

    pub fn drag_start(&mut self, pointer: Point) {
        if let LightboxState::Open(open) = &mut self.state {
            open.dragged = false;
            if open.zoom > MIN_ZOOM {
                open.dragging = true;
                open.anchor = pointer - open.pan;
            }
        }
    }

    pub fn drag_move(&mut self, pointer: Point) {
        if let LightboxState::Open(open) = &mut self.state
            && open.dragging
            && open.zoom > MIN_ZOOM
        {
            open.pan = pointer - open.anchor;
            open.dragged = true;
        }
    }

    /// Pointer released or left the image.
    pub fn drag_end(&mut self) {
        if let LightboxState::Open(open) = &mut self.state {
            open.dragging = false;
        }
    }

    pub fn backdrop_click(&mut self) {
        if let LightboxState::Open(open) = &self.state
            && !open.dragged
        {
            self.close();
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if !self.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => {}
        }
    }

    pub fn view(&self) -> Option<LightboxView> {
        let LightboxState::Open(open) = &self.state else {
            return None;
        };
        let cursor = if open.zoom <= MIN_ZOOM {
            Cursor::Default
        } else if open.dragging {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        };
        Some(LightboxView {
            index: open.index,
            counter: counter_label(open.index, self.image_count),
            scale: open.zoom,
            translate: Point::new(open.pan.x / open.zoom, open.pan.y / open.zoom),
            cursor,
        })
    }
}

/// One-based position label, e.g. `"2 / 4"`.
pub fn counter_label(index: usize, image_count: usize) -> String {
    format!("{} / {}", index + 1, image_count)
}
