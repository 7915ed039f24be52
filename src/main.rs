use std::error::Error;

use sparse_vector::SparseVector;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut sv = SparseVector::<f32, u32>::with_capacity(1 << 16, 10)?;
    for i in 0..10u32 {
        sv.emplace_back(10 - i, (i * i + i) as f32)?;
    }

    for (index, value) in &sv {
        eprintln!("ind {} has {:.6}", index, value);
    }
    sv.sort();
    for (index, value) in &sv {
        eprintln!("ind {} has {:.6}", index, value);
    }

    Ok(())
}
