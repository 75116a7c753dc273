use log::{info, LevelFilter};
use rand::Rng;
use zmatrix::{eye, zmat, IMatrix, IVectorC, IVectorR, NSquareMatrix, ZMatrix, Zmod};

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("ZMATRIX_LOG", "warn"))
        .init();

    // Declare matrix from rows
    let mat: IMatrix<3, 3> = zmat![[1, 2, 3], [4, 5, 6], [7, 8, 9]];

    // Column and row vectors from row-major lists
    let vec: IVectorC<3> = ZMatrix::from_vec(vec![1, 2, 3]);
    let rvec: IVectorR<3> = ZMatrix::from_vec(vec![1, 2, 3]);

    println!("mat[1][2]={}", mat.at(1, 2));

    println!("mat=\n{}", mat);
    println!("vec=\n{}", vec);
    println!("rvec=\n{}", rvec);

    println!("-mat=\n{}", -&mat);
    println!("2*mat=\n{}", 2 * &mat);

    println!("mat*mat=\n{}", &mat * &mat);
    println!("mat*vec=\n{}", &mat * &vec);
    println!("vec*rvec=\n{}", &vec * &rvec);
    println!("rvec*vec=\n{}", &rvec * &vec);

    println!("eye<3>=\n{}", eye::<i32, 3>());
    println!("mat^5=\n{:>8}", mat.pow(5));

    let fib: NSquareMatrix<Zmod<1_000_000_007>, 2> =
        ZMatrix::from_fn(|i, j| Zmod::new(if i == 1 && j == 1 { 0 } else { 1 }));
    println!(
        "fib(10^18) mod 1e9+7 = {}",
        fib.pow(1_000_000_000_000_000_000).at(0, 1)
    );

    let mut rng = rand::thread_rng();
    let random: NSquareMatrix<i64, 4> = ZMatrix::from_fn(|_, _| rng.gen_range(-9..=9));
    let exponent = rng.gen_range(0..8);
    let naive = (0..exponent).fold(eye::<i64, 4>(), |acc, _| &acc * &random);
    info!("checking pow({}) of a random 4x4 matrix", exponent);
    println!("random=\n{:>3}", random);
    println!(
        "random^{} by squaring {} repeated product",
        exponent,
        if random.pow(exponent) == naive {
            "matches"
        } else {
            "differs from"
        }
    );
}
