use thiserror::Error;

use shieldmark_core::{contoso_shield, Artwork};

use crate::fill::fill_polygon;
use crate::legacy::LegacySurfaceManager;
use crate::placement::{composite, Placement};
use crate::surface::Surface;

/// Default destination rectangle width on the target surface.
pub const DEFAULT_DEST_WIDTH: u32 = 90;
/// Default destination rectangle height on the target surface.
pub const DEFAULT_DEST_HEIGHT: u32 = 95;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("target surface has zero area ({width}x{height})")]
    EmptyTarget { width: u32, height: u32 },

    #[error("destination rectangle has zero area ({width}x{height})")]
    EmptyDestRect { width: u32, height: u32 },
}

/// Renders an artwork's fixed drawing sequence onto a target surface.
///
/// Each render creates a private off-screen surface at the artwork's native
/// dimensions, fills every shape group in order, and composites the result
/// onto the borrowed target at the configured destination rectangle. The
/// renderer holds no mutable state; repeated renders write identical bytes.
pub struct LogoRenderer {
    artwork: Artwork,
    dest_x: u32,
    dest_y: u32,
    dest_width: u32,
    dest_height: u32,
    legacy: Option<Box<dyn LegacySurfaceManager>>,
}

impl LogoRenderer {
    pub fn new(artwork: Artwork) -> Self {
        Self {
            artwork,
            dest_x: 0,
            dest_y: 0,
            dest_width: DEFAULT_DEST_WIDTH,
            dest_height: DEFAULT_DEST_HEIGHT,
            legacy: None,
        }
    }

    pub fn with_dest_rect(mut self, x: u32, y: u32, width: u32, height: u32) -> Self {
        self.dest_x = x;
        self.dest_y = y;
        self.dest_width = width;
        self.dest_height = height;
        self
    }

    pub fn with_legacy_manager(mut self, manager: Box<dyn LegacySurfaceManager>) -> Self {
        self.legacy = Some(manager);
        self
    }

    pub fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    /// Render the full drawing sequence onto `target`.
    pub fn render(&self, target: &mut Surface) -> Result<(), RenderError> {
        self.render_prefix(target, self.artwork.group_count())
    }

    /// Render only the first `groups` shape groups onto `target`.
    ///
    /// A count beyond the sequence length clamps to the full sequence.
    pub fn render_prefix(&self, target: &mut Surface, groups: usize) -> Result<(), RenderError> {
        if target.is_empty() {
            return Err(RenderError::EmptyTarget {
                width: target.width(),
                height: target.height(),
            });
        }
        if self.dest_width == 0 || self.dest_height == 0 {
            return Err(RenderError::EmptyDestRect {
                width: self.dest_width,
                height: self.dest_height,
            });
        }

        let mut offscreen = Surface::new(self.artwork.width, self.artwork.height);

        if let Some(manager) = &self.legacy {
            manager.init_surface(&mut offscreen);
        }

        for (i, group) in self.artwork.groups().iter().take(groups).enumerate() {
            log::debug!(
                "filling group {} {:?} with {} ({} vertices)",
                i,
                group.name,
                group.fill.to_hex(),
                group.vertex_count()
            );
            fill_polygon(
                &mut offscreen,
                &group.transformed_outline(),
                group.fill,
                group.rule,
            );
        }

        let placement = Placement::fit(
            &offscreen,
            self.dest_x,
            self.dest_y,
            self.dest_width,
            self.dest_height,
        );
        composite(target, &offscreen, &placement);

        log::info!(
            "rendered {} of {} groups of {:?} into {}x{} at ({}, {})",
            groups.min(self.artwork.group_count()),
            self.artwork.group_count(),
            self.artwork.name,
            self.dest_width,
            self.dest_height,
            self.dest_x,
            self.dest_y
        );
        Ok(())
    }
}

impl Default for LogoRenderer {
    /// The stock configuration: the Contoso shield composited to the fixed
    /// 90x95 rectangle at the target's origin.
    fn default() -> Self {
        Self::new(contoso_shield())
    }
}
