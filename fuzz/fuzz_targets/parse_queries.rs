use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                if let Ok(queries) = xorseq::parse_queries(text) {
                    for q in queries {
                        let _ = q.evaluate();
                    }
                }
            }
        });
    }
}
