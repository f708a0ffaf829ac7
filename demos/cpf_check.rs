use cpf::*;

fn main() {
    // ── 1. Check digits ───────────────────────────────────────────────
    println!("=== Check Digits ===");
    for base in ["312496070", "111444777", "31249607", "31249607a"] {
        match compute_check_digits(base) {
            Ok(full) => println!("  {base} -> {full}"),
            Err(e) => println!("  {base} -> error: {e}"),
        }
    }

    // ── 2. Validation ─────────────────────────────────────────────────
    println!("\n=== Validation ===");
    for value in ["31249607000", "31249607001", "312496070", ""] {
        match validate(value) {
            Ok(valid) => println!("  {value:?}: valid = {valid}"),
            Err(e) => println!("  {value:?}: error: {e}"),
        }
    }

    // ── 3. Generation ─────────────────────────────────────────────────
    println!("\n=== Generation ===");
    let service = StandardCpfService::new();
    for _ in 0..3 {
        let cpf = service.generate_cpf();
        println!("  {cpf} (base {}, check {})", cpf.base(), cpf.check_digits());
    }

    let seeded = StandardCpfService::with_source(SeededDigitSource::new(42));
    println!("  seeded: {}", seeded.generate());

    // ── 4. Absent input through the service ───────────────────────────
    println!("\n=== Service Errors ===");
    if let Err(e) = service.validate(None) {
        println!("  validate(None): {e}");
    }
    if let Err(e) = service.compute_check_digits(None) {
        println!("  compute_check_digits(None): {e}");
    }
}
