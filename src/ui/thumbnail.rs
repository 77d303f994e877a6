//! Thumbnail framing
//!
//! Decides how an image fits its frame from the two aspect ratios
//! alone. Stateless; callers recompute on every draw, so window
//! resizes need no bookkeeping.

/// How the image fills its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailFit {
    /// height: 100%, width: auto
    FitHeight,
    /// width: 100%, height: auto
    FitWidth,
}

impl ThumbnailFit {
    /// Pick the fit for an image of natural size `image_w` x `image_h`
    /// inside a frame of `frame_w` x `frame_h`. An image relatively
    /// wider than its frame is fit by height so it fills vertically and
    /// crops horizontally, and vice versa.
    pub fn compute(image_w: u32, image_h: u32, frame_w: u32, frame_h: u32) -> Self {
        let image_ratio = ratio(image_w, image_h);
        let frame_ratio = ratio(frame_w, frame_h);
        Self::for_ratios(image_ratio, frame_ratio)
    }

    pub fn for_ratios(image_ratio: f64, frame_ratio: f64) -> Self {
        if image_ratio > frame_ratio {
            ThumbnailFit::FitHeight
        } else {
            ThumbnailFit::FitWidth
        }
    }

    /// CSS-equivalent sizing for the chosen fit
    pub fn label(&self) -> &'static str {
        match self {
            ThumbnailFit::FitHeight => "h:100% w:auto",
            ThumbnailFit::FitWidth => "w:100% h:auto",
        }
    }
}

fn ratio(w: u32, h: u32) -> f64 {
    if h == 0 {
        return 0.0;
    }
    f64::from(w) / f64::from(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_in_square_frame_fits_height() {
        assert_eq!(ThumbnailFit::for_ratios(2.0, 1.0), ThumbnailFit::FitHeight);
    }

    #[test]
    fn test_tall_image_in_square_frame_fits_width() {
        assert_eq!(ThumbnailFit::for_ratios(0.5, 1.0), ThumbnailFit::FitWidth);
    }

    #[test]
    fn test_equal_ratios_fit_width() {
        assert_eq!(ThumbnailFit::for_ratios(1.0, 1.0), ThumbnailFit::FitWidth);
    }

    #[test]
    fn test_compute_from_dimensions() {
        // 800x400 image in a 100x100 frame: image is relatively wider
        assert_eq!(
            ThumbnailFit::compute(800, 400, 100, 100),
            ThumbnailFit::FitHeight
        );
        // 400x800 image in the same frame
        assert_eq!(
            ThumbnailFit::compute(400, 800, 100, 100),
            ThumbnailFit::FitWidth
        );
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        // Degenerate dimensions collapse to ratio 0 and fit by width
        assert_eq!(
            ThumbnailFit::compute(800, 0, 100, 100),
            ThumbnailFit::FitWidth
        );
    }
}
