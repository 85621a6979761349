#![no_main]
use bigsigned::magnitude::{self, Window};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (header, body) = data.split_at(4);
    let limbs: Vec<u32> = body
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    let (start1, end1) = (header[0] as usize, header[1] as usize);
    let (start2, end2) = (header[2] as usize, header[3] as usize);

    let (x, y) = match (Window::new(&limbs, start1, end1), Window::new(&limbs, start2, end2)) {
        (Ok(x), Ok(y)) => (x, y),
        _ => return,
    };
    let mut product = vec![0; x.len() + y.len()];
    magnitude::multiply_ranges(x, y, &mut product, 0).unwrap();

    // Multiplication commutes.
    let mut swapped = vec![0; x.len() + y.len()];
    magnitude::multiply_ranges(y, x, &mut swapped, 0).unwrap();
    assert_eq!(product, swapped);
});
