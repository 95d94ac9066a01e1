use jackpot_core::{ProvablyFairRng, SpinEvaluator};

fn main() {
    // Example end-to-end provably-fair spin
    let server_seed = "example-server-seed";
    let client_seed = "example-client-seed";
    let nonce = 1u64;
    let mut rng = ProvablyFairRng::new(server_seed, client_seed, nonce);
    let evaluator = SpinEvaluator::default();
    let result = evaluator.spin(&mut rng);
    println!(
        "server_seed_hash={} reels={} jackpot={}",
        rng.server_seed_hash_hex(),
        evaluator.format(&result),
        evaluator.is_jackpot(&result)
    );
}
