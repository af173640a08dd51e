use chromaton::{blend, Color, Greyscale, Result};

fn print_row(label: &str, colors: &[Color]) {
    let hex = colors
        .iter()
        .map(Color::to_hex_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{:>18}: {}", label, hex);
}

fn main() -> Result<()> {
    let seed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rgb(0, 100, 255)".to_owned());
    let color = Color::new(&seed)?;

    println!("{} = {} = {}", seed, color.to_hsl_string(), color.to_hsv_string());
    if let Some(name) = color.to_name() {
        println!("also known as {}", name);
    }

    print_row("complement", &[color.complement()]);
    print_row("triad", &color.triad());
    print_row("tetrad", &color.tetrad());
    print_row("analogous", &color.analogous(8, 30));
    print_row("monochromatic", &color.monochromatic(5));
    print_row("split complement", &color.split_complement());
    print_row("tint / shade", &[color.tint(0.5)?, color.shade(0.5)?]);
    print_row("greyscale", &[color.desaturate(Greyscale::Luminance)]);
    print_row("websafe", &[color.websafe()]);

    let white = Color::new("white")?;
    print_row("gradient", &color.gradient(&white, 6));

    let mixed = blend::average(&[color, white, color.complement()]);
    print_row("average", mixed.as_slice());

    Ok(())
}
