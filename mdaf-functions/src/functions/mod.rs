//! Benchmark formula modules, one file per function.

pub mod ackley;
pub mod alpine_n2;
pub mod beale;
pub mod booth;
pub mod branin;
pub mod drop_wave;
pub mod easom;
pub mod eggholder;
pub mod goldstein_price;
pub mod griewank;
pub mod happy_cat;
pub mod himmelblau;
pub mod levy;
pub mod matyas;
pub mod michalewicz;
pub mod rastrigin;
pub mod rosenbrock;
pub mod schwefel;
pub mod six_hump_camel;
pub mod sphere;
pub mod styblinski_tang;
pub mod sum_squares;
pub mod zakharov;

pub use ackley::ackley;
pub use alpine_n2::alpine_n2;
pub use beale::beale;
pub use booth::booth;
pub use branin::branin;
pub use drop_wave::drop_wave;
pub use easom::easom;
pub use eggholder::eggholder;
pub use goldstein_price::goldstein_price;
pub use griewank::griewank;
pub use happy_cat::happy_cat;
pub use himmelblau::himmelblau;
pub use levy::levy;
pub use matyas::matyas;
pub use michalewicz::michalewicz;
pub use rastrigin::rastrigin;
pub use rosenbrock::rosenbrock;
pub use schwefel::schwefel;
pub use six_hump_camel::six_hump_camel;
pub use sphere::sphere;
pub use styblinski_tang::styblinski_tang;
pub use sum_squares::sum_squares;
pub use zakharov::zakharov;
