use log::info;
use rand::Rng;
use unipoly::Polynomial;

fn main() {
    init_logger();

    let mut rng = rand::thread_rng();
    let p = random_polynomial(&mut rng, 3);
    let q = random_polynomial(&mut rng, 3);

    info!("p = {p}");
    info!("q = {q}");
    info!("p + q = {}", &p + &q);
    info!("p * q = ({p}) * ({q}) = {}", &p * &q);
    info!("p' = {}", p.differentiate());
    info!("q' = {}", q.differentiate());

    let r = Polynomial::from(p.to_vec());
    info!("p == dense round-trip of p: {}", p == r);
    info!("p == q: {}", p == q);

    let mut c = p.clone();
    c.add_term(4, 3);
    info!("clone after add_term(4, 3): {c}");
    info!("original: {p}");
}

fn init_logger() {
    use simplelog::*;

    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto
    ).unwrap()
}

fn random_polynomial(rng: &mut impl Rng, max_degree: usize) -> Polynomial<i32> {
    let n = rng.gen_range(2..=max_degree + 1);
    let coeffs = (0..n).map(|_| rng.gen_range(-5..=5)).collect::<Vec<_>>();
    Polynomial::from(coeffs)
}
