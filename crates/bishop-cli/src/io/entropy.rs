// crates/bishop-cli/src/io/entropy.rs
//
// Random fingerprints. Kept out of bishop-core so the walk stays deterministic.

use bishop_core::fingerprint::OCTETS;
use bishop_core::Fingerprint;
use rand::rngs::OsRng;
use rand::RngCore;

pub fn random_fingerprint<R: RngCore + ?Sized>(rng: &mut R) -> Fingerprint {
    let mut b = [0u8; OCTETS];
    rng.fill_bytes(&mut b);
    Fingerprint::from_bytes(b)
}

pub fn os_fingerprint() -> Fingerprint {
    random_fingerprint(&mut OsRng)
}
