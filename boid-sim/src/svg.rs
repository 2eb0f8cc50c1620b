use anyhow::{Context, Result};
use boid_shared::render::{agent_triangle, RenderStyle, Sprite, BACKGROUND_COLOR, BOID_COLOR, DEBUG_COLOR};
use boid_shared::FlockSnapshot;
use std::path::Path;

/// Draws a frame as a standalone SVG document.
pub fn render_svg(frame: &FlockSnapshot, style: &RenderStyle) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    );
    svg.push_str(&format!(
        "  <rect width=\"{width}\" height=\"{height}\" fill=\"{BACKGROUND_COLOR}\"/>\n"
    ));

    for agent in &frame.agents {
        if style.debug_overlay {
            for radius in [style.protected_range, style.visual_range] {
                svg.push_str(&format!(
                    "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius}\" fill=\"none\" stroke=\"{DEBUG_COLOR}\"/>\n",
                    agent.x, agent.y
                ));
            }
        }

        match style.sprite {
            Sprite::Disk => svg.push_str(&format!(
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{BOID_COLOR}\"/>\n",
                agent.x, agent.y, style.boid_size
            )),
            Sprite::Triangle => {
                let [a, b, c] = agent_triangle(agent, style.boid_size);
                svg.push_str(&format!(
                    "  <polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" fill=\"{BOID_COLOR}\"/>\n",
                    a.x, a.y, b.x, b.y, c.x, c.y
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

pub fn write_svg(path: &Path, frame: &FlockSnapshot, style: &RenderStyle) -> Result<()> {
    std::fs::write(path, render_svg(frame, style))
        .with_context(|| format!("Failed to write SVG frame to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use boid_shared::{AgentSnapshot, Viewport};

    fn frame() -> FlockSnapshot {
        FlockSnapshot {
            tick: 1,
            viewport: Viewport {
                width: 200.0,
                height: 100.0,
            },
            agents: vec![
                AgentSnapshot { x: 10.0, y: 20.0, vx: 1.0, vy: 0.0 },
                AgentSnapshot { x: 50.0, y: 60.0, vx: 0.0, vy: 1.0 },
            ],
        }
    }

    #[test]
    fn test_disks() {
        let svg = render_svg(&frame(), &RenderStyle::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"r="15""#).count(), 2);
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_one_element_per_line() {
        let svg = render_svg(&frame(), &RenderStyle::default());
        let lines: Vec<&str> = svg.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].trim_start().starts_with("<rect"));
        assert!(lines[2..4].iter().all(|l| l.trim_start().starts_with("<circle")));
        assert_eq!(lines[4], "</svg>");
    }

    #[test]
    fn test_triangles_with_debug_overlay() {
        let style = RenderStyle {
            sprite: Sprite::Triangle,
            debug_overlay: true,
            ..RenderStyle::default()
        };
        let svg = render_svg(&frame(), &style);

        assert_eq!(svg.matches("<polygon").count(), 2);
        assert_eq!(svg.matches(r#"fill="none""#).count(), 4);
        assert!(svg.contains("points=\"25.00,20.00 "));
    }
}
