use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Error type for cancelable fractal generation.
///
/// Keeps cancellation apart from algorithm failures so the generator loop can
/// drop a cancelled pass silently.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// For cancel-aware generation, use [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_fractal_parallel_rayon_cancelable(algorithm, &NeverCancel).map_err(|e| match e {
        GenerateFractalError::Algorithm(alg_err) => alg_err,
        GenerateFractalError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Generates fractal data in parallel with cancellation support.
///
/// Rows are processed in parallel. Each row polls `cancel` through
/// [`CancelToken::check_pixel`], starting at its first pixel. Output is
/// row-major, identical to [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> =
        (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
            .into_par_iter()
            .map(|y| {
                let mut row = Vec::with_capacity(row_width);

                for (i, x) in (x_start..=x_end).enumerate() {
                    cancel
                        .check_pixel(i)
                        .map_err(GenerateFractalError::Cancelled)?;

                    let result = algorithm
                        .compute(Point { x, y })
                        .map_err(GenerateFractalError::Algorithm)?;
                    row.push(result);
                }

                Ok(row)
            })
            .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::mandelbrot_config::default_region;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x * 1000 + pixel.y) as u64)
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    fn stub(width: u32, height: u32) -> StubSuccessAlgorithm {
        StubSuccessAlgorithm {
            pixel_rect: PixelRect::from_size(width, height).unwrap(),
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = stub(11, 9);

        let sequential_results = generate_fractal(&algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results.len(), 99);
        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_matches_sequential_for_mandelbrot() {
        let pixel_rect = PixelRect::from_size(32, 24).unwrap();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, default_region(), 64).unwrap();

        assert_eq!(
            generate_fractal_parallel_rayon(&algorithm).unwrap(),
            generate_fractal(&algorithm).unwrap()
        );
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {
            pixel_rect: PixelRect::from_size(4, 5).unwrap(),
        };

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel);

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(_))));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let algorithm = stub(11, 9);
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_cancels_after_k_polls() {
        let algorithm = stub(6, 6);
        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= cancel_after;

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
        assert!(poll_count.load(Ordering::Relaxed) >= cancel_after);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        // 3000 wide: polls at 0, 1024 and 2048 on each of the 2 rows
        let algorithm = stub(3000, 2);
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 6, "Expected at least 6 polls for 2 wide rows, got {}", polls);
    }

    #[test]
    fn test_generate_fractal_error_display() {
        let cancelled: GenerateFractalError<StubError> = GenerateFractalError::Cancelled(Cancelled);
        let failed: GenerateFractalError<StubError> = GenerateFractalError::Algorithm(StubError {});

        assert_eq!(cancelled.to_string(), "frame generation abandoned");
        assert_eq!(failed.to_string(), "algorithm error: StubError");
    }
}
