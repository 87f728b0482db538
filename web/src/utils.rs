// convert uint to readable format, e.g. 1299 -> "1,299"
pub fn readable_uint(int: u64) -> String {
    let mut s = String::new();
    for (i, char) in int.to_string().chars().rev().enumerate() {
        if i % 3 == 0 && i != 0 {
            s.insert(0, ',');
        }
        s.insert(0, char);
    }
    s
}
