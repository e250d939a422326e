use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Single-threaded reference generator; row-major, inclusive of both corners.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let pixel_rect = algorithm.pixel_rect();

    (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .flat_map(|y| {
            (pixel_rect.top_left().x..=pixel_rect.bottom_right().x).map(move |x| Point { x, y })
        })
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
