use drape::{Curtain, CurtainConfig, NoOpStepObserver};
use wasm_bindgen::prelude::*;

/// Browser-facing curtain wrapper. The JS host owns the canvas: it feeds
/// resize and pointer events in, drives `frame` from requestAnimationFrame,
/// and draws the exported positions as filled quads plus stroked sticks.
///
/// The simulation runs in f64 (browser timestamps and event coordinates
/// are doubles); positions are narrowed to f32 for the render buffers.
#[wasm_bindgen]
pub struct CurtainDemo {
    curtain: Curtain<f64>,
}

#[wasm_bindgen]
impl CurtainDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        CurtainDemo {
            curtain: Curtain::new(width, height, CurtainConfig::default()),
        }
    }

    /// The canvas was resized. `scale` is window.devicePixelRatio; the host
    /// applies it uniformly with setTransform before drawing.
    pub fn resize(&mut self, width: f64, height: f64, scale: f64) {
        self.curtain.resize(width, height, scale);
    }

    /// Pointer moved, in canvas-local coordinates (already offset-corrected
    /// by the host from client coordinates).
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.curtain.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.curtain.pointer_leave();
    }

    /// Advance one animation frame given performance.now() in milliseconds.
    /// Returns the (clamped) time delta that was simulated, in seconds.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        self.curtain.tick(now_ms / 1000.0, &mut NoOpStepObserver)
    }

    /// Flat [x0, y0, x1, y1, ...] particle positions in row-major order.
    pub fn positions(&self) -> Vec<f32> {
        let positions = self.curtain.mesh().positions();
        let mut out = Vec::with_capacity(positions.len() * 2);
        for p in &positions {
            out.push(p.x as f32);
            out.push(p.y as f32);
        }
        out
    }

    /// Flat [a0, b0, a1, b1, ...] stick endpoint indices, one pair per
    /// stick, for stroking line segments.
    pub fn stick_indices(&self) -> Vec<u32> {
        let sticks = self.curtain.mesh().sticks();
        let mut out = Vec::with_capacity(sticks.len() * 2);
        for s in sticks {
            out.push(s.a as u32);
            out.push(s.b as u32);
        }
        out
    }

    /// Flat quad corner indices, four per grid cell, ordered top-left,
    /// top-right, bottom-right, bottom-left, for filling the cloth.
    pub fn quad_indices(&self) -> Vec<u32> {
        let quads = self.curtain.mesh().quads();
        let mut out = Vec::with_capacity(quads.len() * 4);
        for quad in &quads {
            for &idx in quad {
                out.push(idx as u32);
            }
        }
        out
    }

    pub fn cols(&self) -> usize {
        self.curtain.mesh().cols()
    }

    pub fn rows(&self) -> usize {
        self.curtain.mesh().rows()
    }

    pub fn particle_count(&self) -> usize {
        self.curtain.mesh().particle_count()
    }

    /// Device pixel ratio last passed to resize.
    pub fn scale(&self) -> f64 {
        self.curtain.scale()
    }
}
