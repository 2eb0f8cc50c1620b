use anyhow::{Context, Result};
use boid_shared::FlockSnapshot;
use std::io::Write;

/// Consumes frames produced between ticks. Renderers only ever see owned
/// snapshots, never the live flock.
pub trait Renderer {
    fn render(&mut self, frame: &FlockSnapshot) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &FlockSnapshot) -> Result<()> {
        (**self).render(frame)
    }
}

impl Renderer for Vec<Box<dyn Renderer>> {
    fn render(&mut self, frame: &FlockSnapshot) -> Result<()> {
        for renderer in self.iter_mut() {
            renderer.render(frame)?;
        }
        Ok(())
    }
}

/// Writes one JSON document per frame
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    frames: usize,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &FlockSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.writer, frame).context("Failed to encode frame")?;
        self.writer
            .write_all(b"\n")
            .context("Failed to write frame")?;
        self.writer.flush().context("Failed to flush frame")?;
        self.frames += 1;
        Ok(())
    }
}

/// Logs flock statistics for each frame
#[derive(Default)]
pub struct SummaryRenderer;

impl Renderer for SummaryRenderer {
    fn render(&mut self, frame: &FlockSnapshot) -> Result<()> {
        match (frame.centroid(), frame.mean_speed()) {
            (Some(center), Some(speed)) => log::debug!(
                "tick {}: {} boids, centroid ({:.1}, {:.1}), mean speed {:.2}",
                frame.tick,
                frame.agents.len(),
                center.x,
                center.y,
                speed
            ),
            _ => log::debug!("tick {}: empty flock", frame.tick),
        }
        Ok(())
    }
}
