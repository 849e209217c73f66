//! Frame buffer - visible dots of the last step, packed for JS
//!
//! Layout per dot (f32): [screen_x, screen_y, radius, hue, alpha].
//! JS can view it directly through `frame_ptr` / `frame_len` instead of
//! calling back into WASM per dot.

/// f32 values per dot
pub const DOT_STRIDE: usize = 5;

/// One visible, projected point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub screen_x: f32,
    pub screen_y: f32,
    pub radius: f32,
    pub hue: f32,
    /// Projection scale; nearer points are more opaque
    pub alpha: f32,
}

#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    data: Vec<f32>,
}

impl FrameBuffer {
    pub fn with_capacity(dots: usize) -> Self {
        Self { data: Vec::with_capacity(dots * DOT_STRIDE) }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn push(&mut self, dot: Dot) {
        self.data.extend_from_slice(&[dot.screen_x, dot.screen_y, dot.radius, dot.hue, dot.alpha]);
    }

    /// Number of dots
    pub fn len(&self) -> usize {
        self.data.len() / DOT_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Dot> {
        let base = idx.checked_mul(DOT_STRIDE)?;
        let end = base.checked_add(DOT_STRIDE)?;
        let d = self.data.get(base..end)?;
        Some(Dot { screen_x: d[0], screen_y: d[1], radius: d[2], hue: d[3], alpha: d[4] })
    }

    pub fn iter(&self) -> impl Iterator<Item = Dot> + '_ {
        self.data
            .chunks_exact(DOT_STRIDE)
            .map(|d| Dot { screen_x: d[0], screen_y: d[1], radius: d[2], hue: d[3], alpha: d[4] })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len_elements(&self) -> usize {
        self.data.len()
    }

    pub fn len_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f32>()
    }
}
