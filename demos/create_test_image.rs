use image::{GrayImage, Luma};

/// Writes `synthetic_particles.png`: a dim gradient background with a grid
/// of bright square particles of increasing size.
fn main() -> anyhow::Result<()> {
    let (width, height) = (400u32, 300u32);
    let mut img = GrayImage::from_fn(width, height, |x, _| Luma([20 + (x * 60 / width) as u8]));

    for (i, side) in (2..=9u32).enumerate() {
        for row in 0..3u32 {
            let x0 = 20 + i as u32 * 45;
            let y0 = 40 + row * 80;
            for y in y0..y0 + side {
                for x in x0..x0 + side {
                    img.put_pixel(x, y, Luma([220]));
                }
            }
        }
    }

    img.save("synthetic_particles.png")?;
    println!("Created synthetic_particles.png ({}x{} grayscale)", width, height);
    Ok(())
}
