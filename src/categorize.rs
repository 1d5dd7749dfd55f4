//! Categorization collaborators: a fast local dictionary and a slow batch service.

use async_trait::async_trait;

use crate::error::RemoteError;

/// Suggests a category label for free item text.
#[async_trait(?Send)]
pub trait Categorizer {
    /// Fast, local suggestion. `None` when unknown.
    fn suggest(&self, text: &str) -> Option<String>;

    /// Slow, remote suggestion for several texts at once.
    ///
    /// The result is positionally aligned with `texts` and may be shorter;
    /// missing or `None` entries mean "no suggestion".
    async fn suggest_batch(
        &self,
        texts: &[String],
        categories: &[String],
    ) -> Result<Vec<Option<String>>, RemoteError>;
}

/// Common grocery names. Keys are lowercase.
const COMMON_ITEMS: &[(&str, &str)] = &[
    // Produce
    ("apple", "PRODUCE"),
    ("apples", "PRODUCE"),
    ("avocado", "PRODUCE"),
    ("avocados", "PRODUCE"),
    ("banana", "PRODUCE"),
    ("bananas", "PRODUCE"),
    ("basil", "PRODUCE"),
    ("bell pepper", "PRODUCE"),
    ("bell peppers", "PRODUCE"),
    ("blueberries", "PRODUCE"),
    ("broccoli", "PRODUCE"),
    ("cabbage", "PRODUCE"),
    ("carrots", "PRODUCE"),
    ("carrot", "PRODUCE"),
    ("celery", "PRODUCE"),
    ("cherries", "PRODUCE"),
    ("cilantro", "PRODUCE"),
    ("corn", "PRODUCE"),
    ("cucumber", "PRODUCE"),
    ("cucumbers", "PRODUCE"),
    ("garlic", "PRODUCE"),
    ("ginger", "PRODUCE"),
    ("grapes", "PRODUCE"),
    ("green beans", "PRODUCE"),
    ("green onions", "PRODUCE"),
    ("herbs", "PRODUCE"),
    ("jalapeno", "PRODUCE"),
    ("jalapenos", "PRODUCE"),
    ("kale", "PRODUCE"),
    ("lemons", "PRODUCE"),
    ("lemon", "PRODUCE"),
    ("lettuce", "PRODUCE"),
    ("limes", "PRODUCE"),
    ("lime", "PRODUCE"),
    ("mango", "PRODUCE"),
    ("mangoes", "PRODUCE"),
    ("melon", "PRODUCE"),
    ("mint", "PRODUCE"),
    ("mushrooms", "PRODUCE"),
    ("mushroom", "PRODUCE"),
    ("onion", "PRODUCE"),
    ("onions", "PRODUCE"),
    ("orange", "PRODUCE"),
    ("oranges", "PRODUCE"),
    ("parsley", "PRODUCE"),
    ("peaches", "PRODUCE"),
    ("pears", "PRODUCE"),
    ("peas", "PRODUCE"),
    ("peppers", "PRODUCE"),
    ("pineapple", "PRODUCE"),
    ("potatoes", "PRODUCE"),
    ("potato", "PRODUCE"),
    ("raspberries", "PRODUCE"),
    ("romaine", "PRODUCE"),
    ("rosemary", "PRODUCE"),
    ("salad", "PRODUCE"),
    ("salad mix", "PRODUCE"),
    ("scallions", "PRODUCE"),
    ("shallots", "PRODUCE"),
    ("spinach", "PRODUCE"),
    ("squash", "PRODUCE"),
    ("strawberries", "PRODUCE"),
    ("sweet potato", "PRODUCE"),
    ("sweet potatoes", "PRODUCE"),
    ("thyme", "PRODUCE"),
    ("tomato", "PRODUCE"),
    ("tomatoes", "PRODUCE"),
    ("watermelon", "PRODUCE"),
    ("zucchini", "PRODUCE"),
    ("arugula", "PRODUCE"),
    ("asparagus", "PRODUCE"),
    ("beets", "PRODUCE"),
    ("brussels sprouts", "PRODUCE"),
    ("cauliflower", "PRODUCE"),
    ("clementines", "PRODUCE"),
    ("coleslaw", "PRODUCE"),
    ("coleslaw mix", "PRODUCE"),
    ("dill", "PRODUCE"),
    ("edamame", "PRODUCE"),
    ("eggplant", "PRODUCE"),
    ("fennel", "PRODUCE"),
    ("figs", "PRODUCE"),
    ("fruit", "PRODUCE"),
    ("green pepper", "PRODUCE"),
    ("honeydew", "PRODUCE"),
    ("jicama", "PRODUCE"),
    ("kiwi", "PRODUCE"),
    ("leeks", "PRODUCE"),
    ("nectarines", "PRODUCE"),
    ("okra", "PRODUCE"),
    ("papaya", "PRODUCE"),
    ("parsnips", "PRODUCE"),
    ("plums", "PRODUCE"),
    ("pomegranate", "PRODUCE"),
    ("radishes", "PRODUCE"),
    ("red onion", "PRODUCE"),
    ("red pepper", "PRODUCE"),
    ("rhubarb", "PRODUCE"),
    ("shallot", "PRODUCE"),
    ("snap peas", "PRODUCE"),
    ("snow peas", "PRODUCE"),
    ("sprouts", "PRODUCE"),
    ("tangerines", "PRODUCE"),
    ("turnips", "PRODUCE"),
    ("yams", "PRODUCE"),
    ("shredded lettuce", "PRODUCE"),
    ("baby spinach", "PRODUCE"),
    ("mixed greens", "PRODUCE"),

    // Meat
    ("bacon", "MEAT"),
    ("beef", "MEAT"),
    ("brisket", "MEAT"),
    ("chicken", "MEAT"),
    ("chicken breast", "MEAT"),
    ("chicken breasts", "MEAT"),
    ("chicken thighs", "MEAT"),
    ("chicken wings", "MEAT"),
    ("deli meat", "MEAT"),
    ("ground beef", "MEAT"),
    ("ground turkey", "MEAT"),
    ("ham", "MEAT"),
    ("hot dogs", "MEAT"),
    ("lamb", "MEAT"),
    ("meatballs", "MEAT"),
    ("pork", "MEAT"),
    ("pork chops", "MEAT"),
    ("ribs", "MEAT"),
    ("roast", "MEAT"),
    ("salmon", "MEAT"),
    ("sausage", "MEAT"),
    ("sausages", "MEAT"),
    ("shrimp", "MEAT"),
    ("steak", "MEAT"),
    ("steaks", "MEAT"),
    ("tilapia", "MEAT"),
    ("tuna", "MEAT"),
    ("turkey", "MEAT"),
    ("crab", "MEAT"),
    ("fish", "MEAT"),
    ("lobster", "MEAT"),
    ("pepperoni", "MEAT"),
    ("prosciutto", "MEAT"),
    ("salami", "MEAT"),
    ("scallops", "MEAT"),
    ("cod", "MEAT"),
    ("catfish", "MEAT"),
    ("anchovies", "MEAT"),
    ("chorizo", "MEAT"),
    ("corned beef", "MEAT"),
    ("filet", "MEAT"),
    ("flank steak", "MEAT"),
    ("ground chicken", "MEAT"),
    ("ground pork", "MEAT"),
    ("jerky", "MEAT"),
    ("lunch meat", "MEAT"),
    ("pork loin", "MEAT"),
    ("pork tenderloin", "MEAT"),
    ("pulled pork", "MEAT"),
    ("rib eye", "MEAT"),
    ("ribeye", "MEAT"),
    ("roast beef", "MEAT"),
    ("sirloin", "MEAT"),
    ("tri tip", "MEAT"),
    ("wings", "MEAT"),

    // Dairy
    ("butter", "DAIRY"),
    ("cheddar", "DAIRY"),
    ("cheese", "DAIRY"),
    ("colby jack", "DAIRY"),
    ("cottage cheese", "DAIRY"),
    ("cream", "DAIRY"),
    ("cream cheese", "DAIRY"),
    ("eggs", "DAIRY"),
    ("egg", "DAIRY"),
    ("feta", "DAIRY"),
    ("goat cheese", "DAIRY"),
    ("greek yogurt", "DAIRY"),
    ("half and half", "DAIRY"),
    ("heavy cream", "DAIRY"),
    ("milk", "DAIRY"),
    ("mozzarella", "DAIRY"),
    ("parmesan", "DAIRY"),
    ("provolone", "DAIRY"),
    ("ricotta", "DAIRY"),
    ("shredded cheese", "DAIRY"),
    ("sliced cheese", "DAIRY"),
    ("sour cream", "DAIRY"),
    ("swiss cheese", "DAIRY"),
    ("whipped cream", "DAIRY"),
    ("whipping cream", "DAIRY"),
    ("yogurt", "DAIRY"),
    ("american cheese", "DAIRY"),
    ("brie", "DAIRY"),
    ("buttermilk", "DAIRY"),
    ("coffee creamer", "DAIRY"),
    ("creamer", "DAIRY"),
    ("eggnog", "DAIRY"),
    ("gouda", "DAIRY"),
    ("gruyere", "DAIRY"),
    ("jack cheese", "DAIRY"),
    ("monterey jack", "DAIRY"),
    ("oat milk", "DAIRY"),
    ("almond milk", "DAIRY"),
    ("pepper jack", "DAIRY"),
    ("string cheese", "DAIRY"),
    ("velveeta", "DAIRY"),

    // Frozen
    ("frozen berries", "FROZEN"),
    ("frozen fruit", "FROZEN"),
    ("frozen meals", "FROZEN"),
    ("frozen peas", "FROZEN"),
    ("frozen pizza", "FROZEN"),
    ("frozen vegetables", "FROZEN"),
    ("frozen veggies", "FROZEN"),
    ("frozen waffles", "FROZEN"),
    ("ice cream", "FROZEN"),
    ("popsicles", "FROZEN"),
    ("tater tots", "FROZEN"),
    ("frozen chicken", "FROZEN"),
    ("frozen fries", "FROZEN"),
    ("french fries", "FROZEN"),
    ("corn dogs", "FROZEN"),
    ("frozen burritos", "FROZEN"),
    ("frozen shrimp", "FROZEN"),
    ("ice pops", "FROZEN"),
    ("lean cuisine", "FROZEN"),
    ("pizza rolls", "FROZEN"),
    ("pot pies", "FROZEN"),
    ("tv dinners", "FROZEN"),
    ("waffles", "FROZEN"),
    ("frozen dinner", "FROZEN"),
    ("frozen dinners", "FROZEN"),
    ("frozen fish", "FROZEN"),
    ("ice", "FROZEN"),
    ("sorbet", "FROZEN"),
    ("gelato", "FROZEN"),

    // Bakery
    ("bagels", "BAKERY"),
    ("baguette", "BAKERY"),
    ("bread", "BAKERY"),
    ("buns", "BAKERY"),
    ("cake", "BAKERY"),
    ("cinnamon rolls", "BAKERY"),
    ("croissants", "BAKERY"),
    ("donuts", "BAKERY"),
    ("doughnuts", "BAKERY"),
    ("english muffins", "BAKERY"),
    ("hamburger buns", "BAKERY"),
    ("hot dog buns", "BAKERY"),
    ("muffins", "BAKERY"),
    ("naan", "BAKERY"),
    ("pie", "BAKERY"),
    ("pita", "BAKERY"),
    ("pita bread", "BAKERY"),
    ("rolls", "BAKERY"),
    ("sourdough", "BAKERY"),
    ("tortillas", "BAKERY"),
    ("wheat bread", "BAKERY"),
    ("white bread", "BAKERY"),
    ("wraps", "BAKERY"),
    ("cornbread", "BAKERY"),
    ("crescent rolls", "BAKERY"),
    ("dinner rolls", "BAKERY"),
    ("flatbread", "BAKERY"),
    ("flour tortillas", "BAKERY"),
    ("focaccia", "BAKERY"),
    ("french bread", "BAKERY"),
    ("garlic bread", "BAKERY"),
    ("hoagie rolls", "BAKERY"),
    ("kaiser rolls", "BAKERY"),
    ("pancake mix", "BAKERY"),
    ("rye bread", "BAKERY"),
    ("sub rolls", "BAKERY"),
    ("texas toast", "BAKERY"),
    ("corn tortillas", "BAKERY"),

    // Pantry
    ("baking powder", "PANTRY"),
    ("baking soda", "PANTRY"),
    ("bbq sauce", "PANTRY"),
    ("beans", "PANTRY"),
    ("black beans", "PANTRY"),
    ("bouillon", "PANTRY"),
    ("bread crumbs", "PANTRY"),
    ("broth", "PANTRY"),
    ("brown sugar", "PANTRY"),
    ("canned corn", "PANTRY"),
    ("canned tomatoes", "PANTRY"),
    ("cereal", "PANTRY"),
    ("chicken broth", "PANTRY"),
    ("coconut milk", "PANTRY"),
    ("cooking spray", "PANTRY"),
    ("cornstarch", "PANTRY"),
    ("dressing", "PANTRY"),
    ("flour", "PANTRY"),
    ("honey", "PANTRY"),
    ("hot sauce", "PANTRY"),
    ("jam", "PANTRY"),
    ("jelly", "PANTRY"),
    ("ketchup", "PANTRY"),
    ("mac and cheese", "PANTRY"),
    ("maple syrup", "PANTRY"),
    ("marinara", "PANTRY"),
    ("mayonnaise", "PANTRY"),
    ("mayo", "PANTRY"),
    ("mustard", "PANTRY"),
    ("oatmeal", "PANTRY"),
    ("oats", "PANTRY"),
    ("olive oil", "PANTRY"),
    ("oil", "PANTRY"),
    ("pasta", "PANTRY"),
    ("pasta sauce", "PANTRY"),
    ("peanut butter", "PANTRY"),
    ("pepper", "PANTRY"),
    ("pickles", "PANTRY"),
    ("ranch", "PANTRY"),
    ("ranch dressing", "PANTRY"),
    ("red pepper flakes", "PANTRY"),
    ("rice", "PANTRY"),
    ("salad dressing", "PANTRY"),
    ("salsa", "PANTRY"),
    ("salt", "PANTRY"),
    ("soy sauce", "PANTRY"),
    ("spaghetti", "PANTRY"),
    ("spaghetti sauce", "PANTRY"),
    ("spices", "PANTRY"),
    ("sugar", "PANTRY"),
    ("tomato paste", "PANTRY"),
    ("tomato sauce", "PANTRY"),
    ("vanilla", "PANTRY"),
    ("vanilla extract", "PANTRY"),
    ("vegetable oil", "PANTRY"),
    ("vinegar", "PANTRY"),
    ("worcestershire", "PANTRY"),
    ("alfredo sauce", "PANTRY"),
    ("almond butter", "PANTRY"),
    ("apple cider vinegar", "PANTRY"),
    ("balsamic", "PANTRY"),
    ("balsamic vinegar", "PANTRY"),
    ("brownie mix", "PANTRY"),
    ("cake mix", "PANTRY"),
    ("canola oil", "PANTRY"),
    ("capers", "PANTRY"),
    ("chicken stock", "PANTRY"),
    ("chili powder", "PANTRY"),
    ("cinnamon", "PANTRY"),
    ("cocoa", "PANTRY"),
    ("coconut oil", "PANTRY"),
    ("condensed milk", "PANTRY"),
    ("corn syrup", "PANTRY"),
    ("couscous", "PANTRY"),
    ("croutons", "PANTRY"),
    ("cumin", "PANTRY"),
    ("curry paste", "PANTRY"),
    ("dijon mustard", "PANTRY"),
    ("elbow macaroni", "PANTRY"),
    ("evaporated milk", "PANTRY"),
    ("garlic powder", "PANTRY"),
    ("gelatin", "PANTRY"),
    ("gravy", "PANTRY"),
    ("hoisin sauce", "PANTRY"),
    ("italian seasoning", "PANTRY"),
    ("lentils", "PANTRY"),
    ("molasses", "PANTRY"),
    ("noodles", "PANTRY"),
    ("nutmeg", "PANTRY"),
    ("olives", "PANTRY"),
    ("onion powder", "PANTRY"),
    ("oregano", "PANTRY"),
    ("oyster sauce", "PANTRY"),
    ("panko", "PANTRY"),
    ("paprika", "PANTRY"),
    ("penne", "PANTRY"),
    ("powdered sugar", "PANTRY"),
    ("quinoa", "PANTRY"),
    ("ramen", "PANTRY"),
    ("refried beans", "PANTRY"),
    ("relish", "PANTRY"),
    ("sesame oil", "PANTRY"),
    ("sriracha", "PANTRY"),
    ("steak sauce", "PANTRY"),
    ("stuffing", "PANTRY"),
    ("taco seasoning", "PANTRY"),
    ("taco shells", "PANTRY"),
    ("tahini", "PANTRY"),
    ("teriyaki sauce", "PANTRY"),
    ("turmeric", "PANTRY"),
    ("yeast", "PANTRY"),
    ("pinto beans", "PANTRY"),
    ("kidney beans", "PANTRY"),
    ("chickpeas", "PANTRY"),
    ("canned tuna", "PANTRY"),
    ("canned chicken", "PANTRY"),
    ("soup", "PANTRY"),
    ("raisins", "PANTRY"),
    ("dried fruit", "PANTRY"),
    ("breadcrumbs", "PANTRY"),

    // Beverages
    ("beer", "BEVERAGES"),
    ("coffee", "BEVERAGES"),
    ("energy drinks", "BEVERAGES"),
    ("gatorade", "BEVERAGES"),
    ("juice", "BEVERAGES"),
    ("kombucha", "BEVERAGES"),
    ("lemonade", "BEVERAGES"),
    ("orange juice", "BEVERAGES"),
    ("seltzer", "BEVERAGES"),
    ("soda", "BEVERAGES"),
    ("sparkling water", "BEVERAGES"),
    ("tea", "BEVERAGES"),
    ("water", "BEVERAGES"),
    ("wine", "BEVERAGES"),
    ("apple juice", "BEVERAGES"),
    ("champagne", "BEVERAGES"),
    ("cider", "BEVERAGES"),
    ("coconut water", "BEVERAGES"),
    ("coke", "BEVERAGES"),
    ("cold brew", "BEVERAGES"),
    ("cranberry juice", "BEVERAGES"),
    ("diet coke", "BEVERAGES"),
    ("dr pepper", "BEVERAGES"),
    ("espresso", "BEVERAGES"),
    ("grape juice", "BEVERAGES"),
    ("green tea", "BEVERAGES"),
    ("iced tea", "BEVERAGES"),
    ("la croix", "BEVERAGES"),
    ("lacroix", "BEVERAGES"),
    ("margarita mix", "BEVERAGES"),
    ("mountain dew", "BEVERAGES"),
    ("pepsi", "BEVERAGES"),
    ("prosecco", "BEVERAGES"),
    ("red bull", "BEVERAGES"),
    ("sprite", "BEVERAGES"),
    ("tonic water", "BEVERAGES"),
    ("vodka", "BEVERAGES"),
    ("whiskey", "BEVERAGES"),
    ("tequila", "BEVERAGES"),
    ("rum", "BEVERAGES"),
    ("gin", "BEVERAGES"),
    ("bourbon", "BEVERAGES"),

    // Snacks
    ("almonds", "SNACKS"),
    ("cashews", "SNACKS"),
    ("cheese crackers", "SNACKS"),
    ("cheez its", "SNACKS"),
    ("chips", "SNACKS"),
    ("chocolate", "SNACKS"),
    ("cookies", "SNACKS"),
    ("crackers", "SNACKS"),
    ("dark chocolate", "SNACKS"),
    ("doritos", "SNACKS"),
    ("dried mango", "SNACKS"),
    ("fruit snacks", "SNACKS"),
    ("goldfish", "SNACKS"),
    ("granola", "SNACKS"),
    ("granola bars", "SNACKS"),
    ("gummy bears", "SNACKS"),
    ("hummus", "SNACKS"),
    ("mixed nuts", "SNACKS"),
    ("nuts", "SNACKS"),
    ("peanuts", "SNACKS"),
    ("pecans", "SNACKS"),
    ("pistachios", "SNACKS"),
    ("popcorn", "SNACKS"),
    ("potato chips", "SNACKS"),
    ("pretzels", "SNACKS"),
    ("protein bars", "SNACKS"),
    ("rice cakes", "SNACKS"),
    ("salted nuts", "SNACKS"),
    ("seeds", "SNACKS"),
    ("snack bars", "SNACKS"),
    ("tortilla chips", "SNACKS"),
    ("trail mix", "SNACKS"),
    ("walnuts", "SNACKS"),
    ("candy", "SNACKS"),
    ("beef jerky", "SNACKS"),
    ("brownie", "SNACKS"),
    ("brownies", "SNACKS"),
    ("cheetos", "SNACKS"),
    ("chex mix", "SNACKS"),
    ("fritos", "SNACKS"),
    ("gummies", "SNACKS"),
    ("lays", "SNACKS"),
    ("m&ms", "SNACKS"),
    ("oreos", "SNACKS"),
    ("pringles", "SNACKS"),
    ("ritz", "SNACKS"),
    ("snickers", "SNACKS"),
    ("sunflower seeds", "SNACKS"),
    ("tostitos", "SNACKS"),

    // Health
    ("advil", "HEALTH"),
    ("allergy medicine", "HEALTH"),
    ("aspirin", "HEALTH"),
    ("band aids", "HEALTH"),
    ("bandages", "HEALTH"),
    ("body wash", "HEALTH"),
    ("conditioner", "HEALTH"),
    ("contact solution", "HEALTH"),
    ("cotton balls", "HEALTH"),
    ("cough drops", "HEALTH"),
    ("cough syrup", "HEALTH"),
    ("dayquil", "HEALTH"),
    ("deodorant", "HEALTH"),
    ("face wash", "HEALTH"),
    ("first aid", "HEALTH"),
    ("floss", "HEALTH"),
    ("ibuprofen", "HEALTH"),
    ("lip balm", "HEALTH"),
    ("lotion", "HEALTH"),
    ("medicine", "HEALTH"),
    ("melatonin", "HEALTH"),
    ("mouthwash", "HEALTH"),
    ("multivitamin", "HEALTH"),
    ("nyquil", "HEALTH"),
    ("pain reliever", "HEALTH"),
    ("q tips", "HEALTH"),
    ("razors", "HEALTH"),
    ("shampoo", "HEALTH"),
    ("shaving cream", "HEALTH"),
    ("soap", "HEALTH"),
    ("sunscreen", "HEALTH"),
    ("tampons", "HEALTH"),
    ("tissues", "HEALTH"),
    ("toothbrush", "HEALTH"),
    ("toothpaste", "HEALTH"),
    ("tylenol", "HEALTH"),
    ("tums", "HEALTH"),
    ("vitamins", "HEALTH"),
    ("pepto bismol", "HEALTH"),
    ("benadryl", "HEALTH"),
    ("chapstick", "HEALTH"),
    ("eye drops", "HEALTH"),
    ("hand sanitizer", "HEALTH"),
    ("hydrogen peroxide", "HEALTH"),
    ("neosporin", "HEALTH"),
    ("rubbing alcohol", "HEALTH"),
    ("thermometer", "HEALTH"),

    // Household
    ("aluminum foil", "HOUSEHOLD"),
    ("batteries", "HOUSEHOLD"),
    ("bleach", "HOUSEHOLD"),
    ("broom", "HOUSEHOLD"),
    ("candles", "HOUSEHOLD"),
    ("cleaning spray", "HOUSEHOLD"),
    ("clorox", "HOUSEHOLD"),
    ("clorox wipes", "HOUSEHOLD"),
    ("dish soap", "HOUSEHOLD"),
    ("dishwasher pods", "HOUSEHOLD"),
    ("dryer sheets", "HOUSEHOLD"),
    ("fabric softener", "HOUSEHOLD"),
    ("garbage bags", "HOUSEHOLD"),
    ("glad bags", "HOUSEHOLD"),
    ("hand soap", "HOUSEHOLD"),
    ("kitchen towels", "HOUSEHOLD"),
    ("laundry detergent", "HOUSEHOLD"),
    ("light bulbs", "HOUSEHOLD"),
    ("lysol", "HOUSEHOLD"),
    ("napkins", "HOUSEHOLD"),
    ("paper plates", "HOUSEHOLD"),
    ("paper towels", "HOUSEHOLD"),
    ("parchment paper", "HOUSEHOLD"),
    ("plastic bags", "HOUSEHOLD"),
    ("plastic cups", "HOUSEHOLD"),
    ("plastic wrap", "HOUSEHOLD"),
    ("sandwich bags", "HOUSEHOLD"),
    ("saran wrap", "HOUSEHOLD"),
    ("sponges", "HOUSEHOLD"),
    ("sponge", "HOUSEHOLD"),
    ("straw", "HOUSEHOLD"),
    ("straws", "HOUSEHOLD"),
    ("toilet paper", "HOUSEHOLD"),
    ("tp", "HOUSEHOLD"),
    ("trash bags", "HOUSEHOLD"),
    ("windex", "HOUSEHOLD"),
    ("wipes", "HOUSEHOLD"),
    ("ziploc bags", "HOUSEHOLD"),
    ("ziplock bags", "HOUSEHOLD"),
    ("air freshener", "HOUSEHOLD"),
    ("baking sheet", "HOUSEHOLD"),
    ("clothespins", "HOUSEHOLD"),
    ("detergent", "HOUSEHOLD"),
    ("dishwasher detergent", "HOUSEHOLD"),
    ("duster", "HOUSEHOLD"),
    ("freezer bags", "HOUSEHOLD"),
    ("gloves", "HOUSEHOLD"),
    ("lint roller", "HOUSEHOLD"),
    ("mop", "HOUSEHOLD"),
    ("oven cleaner", "HOUSEHOLD"),
    ("pine sol", "HOUSEHOLD"),
    ("pledge", "HOUSEHOLD"),
    ("steel wool", "HOUSEHOLD"),
    ("tide", "HOUSEHOLD"),
    ("tide pods", "HOUSEHOLD"),
    ("tin foil", "HOUSEHOLD"),

    // Other
    ("cat food", "OTHER"),
    ("cat litter", "OTHER"),
    ("dog food", "OTHER"),
    ("dog treats", "OTHER"),
    ("pet food", "OTHER"),
    ("charcoal", "OTHER"),
    ("diapers", "OTHER"),
    ("baby food", "OTHER"),
    ("baby wipes", "OTHER"),
    ("formula", "OTHER"),
    ("flowers", "OTHER"),
    ("gift card", "OTHER"),
    ("greeting card", "OTHER"),
    ("ice pack", "OTHER"),
    ("lighter", "OTHER"),
    ("matches", "OTHER"),
    ("newspaper", "OTHER"),
    ("stamps", "OTHER"),
];

/// Look a name up in the common-items table.
///
/// Case-insensitive, surrounding whitespace ignored, and a trailing `s` is
/// dropped as a second attempt for simple plurals.
pub fn lookup_category(name: &str) -> Option<&'static str> {
    let key = name.trim().to_lowercase();
    let find = |k: &str| {
        COMMON_ITEMS
            .iter()
            .find(|(item, _)| *item == k)
            .map(|(_, category)| *category)
    };
    find(&key).or_else(|| key.strip_suffix('s').and_then(find))
}

/// Dictionary-only categorizer. Never reaches out to a remote service.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalCategorizer;

#[async_trait(?Send)]
impl Categorizer for LocalCategorizer {
    fn suggest(&self, text: &str) -> Option<String> {
        lookup_category(text).map(str::to_owned)
    }

    async fn suggest_batch(
        &self,
        texts: &[String],
        _categories: &[String],
    ) -> Result<Vec<Option<String>>, RemoteError> {
        Ok(texts.iter().map(|t| self.suggest(t)).collect())
    }
}
