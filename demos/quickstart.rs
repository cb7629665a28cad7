use chrono::Utc;
use epochal::{approx_k, datetime_to_jd, delta_t, jd_to_datetime, CivilDateTime, JulianDate};

fn main() {
    let now = Utc::now();
    let jd = JulianDate::from_utc(now);

    println!("JD(UT): {jd}");
    println!("T: {}", jd.julian_centuries());
    match delta_t(&now) {
        Some(dt) => println!("ΔT: {dt}"),
        None => println!("ΔT: no estimate"),
    }
    println!("k seed: {:.2}", approx_k(&now));

    let sputnik = CivilDateTime::new(1957, 10, 4, 19, 26, 24);
    let jd = datetime_to_jd(&sputnik);
    println!("{sputnik} -> {jd} -> {}", jd_to_datetime(jd));
}
