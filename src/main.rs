use ordmap_logic::OrdMap;

fn main() {
    let mut map = OrdMap::new();

    map.put(&5, &"a".to_string()).unwrap();
    map.put(&1, &"b".to_string()).unwrap();
    map.put(&3, &"c".to_string()).unwrap();

    for (key, value) in &map {
        println!("{} -> {}", key, value);
    }

    println!("-----------");

    map.remove(&3).unwrap();

    let mut current = map.first().unwrap();
    while let Some(key) = current {
        println!("{},", key);
        current = map.next().unwrap();
    }

    println!("{}", map);
}
