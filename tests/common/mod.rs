#![allow(dead_code)]

use hub_assignment::Instance;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// five hubs (0..5) and five providers (5..10)
pub fn listing(provider_capacities: [i64; 5], preliminary: &[(usize, usize)]) -> Instance<i64> {
    let mut capacities = vec![0; 5];
    capacities.extend(provider_capacities);
    Instance::new(5, 5)
        .connect(0, [5, 7, 8])
        .connect(1, [5, 8])
        .connect(2, [7, 8, 9])
        .connect(3, [5, 6, 8, 9])
        .connect(4, [5, 6, 7, 8])
        .with_capacities(capacities)
        .with_preliminary(preliminary.iter().copied())
}
