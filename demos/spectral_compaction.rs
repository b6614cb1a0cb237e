use dct_transforms::{CosineTransform, Dct2, TransformResult, comparison, generation};

pub fn main() -> TransformResult<()> {
    let size = 64;
    let dct = Dct2::<f32>::new(size)?;

    // A low-frequency tone: most of its energy lands in the first few
    // cosine coefficients.
    let frame: Vec<f32> = generation::sine(size, 200.0, 16_000.0, 1.0);

    let mut spectrum = vec![0.0f32; size];
    dct.direct_norm(&frame, &mut spectrum)?;

    let total_energy: f32 = spectrum.iter().map(|c| c * c).sum();
    let leading_energy: f32 = spectrum[..8].iter().map(|c| c * c).sum();
    println!(
        "Energy in the first 8 of {size} coefficients: {:.1}%",
        100.0 * leading_energy / total_energy
    );

    // The truncated-output form computes just the coefficients it keeps.
    let mut truncated = vec![0.0f32; 8];
    dct.direct_norm(&frame, &mut truncated)?;
    println!("Truncated spectrum: {truncated:?}");

    // Round trip: undo the orthonormal scaling, then apply the
    // unnormalized inverse.
    let norm = (0.5 / size as f64).sqrt() as f32;
    let mut rescaled: Vec<f32> = spectrum.iter().map(|&c| c * norm).collect();
    rescaled[0] = spectrum[0] * norm * std::f32::consts::SQRT_2;

    let mut reconstructed = vec![0.0f32; size];
    dct.inverse(&rescaled, &mut reconstructed)?;

    let error = comparison::nrmse(&reconstructed, &frame)?;
    println!("Round-trip normalized RMSE: {error:.2e}");

    Ok(())
}
