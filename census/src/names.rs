//! Name lists for generated sample households.

use rand::Rng;

const MALE_FIRST_NAMES: &[&str] = &[
    "Aarav", "Abhijit", "Ajay", "Amol", "Anand", "Aniket", "Ashok", "Atharva",
    "Chetan", "Dattatray", "Dilip", "Ganesh", "Gopal", "Harish", "Jayant",
    "Kedar", "Kiran", "Mahesh", "Manoj", "Milind", "Mohan", "Nikhil", "Nitin",
    "Omkar", "Pandurang", "Prakash", "Pramod", "Prasad", "Rahul", "Rajesh",
    "Ramesh", "Sachin", "Sandeep", "Sanjay", "Santosh", "Shivaji", "Shrikant",
    "Sudhir", "Suresh", "Swapnil", "Tanmay", "Tukaram", "Vaibhav", "Vijay",
    "Vinayak", "Vishal", "Vivek", "Yash", "Yogesh",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Aarti", "Anjali", "Anuradha", "Archana", "Asha", "Ashwini", "Bhakti",
    "Deepa", "Gauri", "Jyoti", "Kalpana", "Kavita", "Ketaki", "Madhuri",
    "Manisha", "Meena", "Mrunal", "Neha", "Pallavi", "Pooja", "Prajakta",
    "Priya", "Rajashree", "Rekha", "Rohini", "Rupali", "Sakshi", "Sangeeta",
    "Savita", "Shalini", "Sharada", "Shubhangi", "Smita", "Sneha", "Sunanda",
    "Sunita", "Supriya", "Swati", "Tejaswini", "Ujwala", "Usha", "Vaishali",
    "Vandana", "Varsha", "Vidya", "Yamini",
];

const SURNAMES: &[&str] = &[
    "Patil", "Deshmukh", "Kulkarni", "Joshi", "Pawar", "Jadhav", "Shinde",
    "More", "Gaikwad", "Chavan", "Kale", "Deshpande", "Bhosale", "Kadam",
    "Salunkhe", "Mane", "Sawant", "Thorat", "Phadke", "Gokhale", "Apte",
    "Kamble", "Wagh", "Nikam", "Mahajan", "Karandikar", "Sathe", "Londhe",
    "Ghorpade", "Bhide", "Datar", "Chitale", "Limaye", "Ranade", "Tilak",
];

/// Random given name for the gender.
pub fn random_first_name<R: Rng + ?Sized>(rng: &mut R, is_male: bool) -> &'static str {
    if is_male {
        MALE_FIRST_NAMES[rng.gen_range(0..MALE_FIRST_NAMES.len())]
    } else {
        FEMALE_FIRST_NAMES[rng.gen_range(0..FEMALE_FIRST_NAMES.len())]
    }
}

/// Random family name, shared by everyone in a generated household.
pub fn random_surname<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SURNAMES[rng.gen_range(0..SURNAMES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name_generation() {
        let mut rng = StdRng::seed_from_u64(3);

        let first = random_first_name(&mut rng, true);
        assert!(MALE_FIRST_NAMES.contains(&first));

        let first = random_first_name(&mut rng, false);
        assert!(FEMALE_FIRST_NAMES.contains(&first));

        let last = random_surname(&mut rng);
        assert!(SURNAMES.contains(&last));
    }
}
