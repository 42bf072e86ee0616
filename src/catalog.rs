//! The fixed prompt catalog.

/// One catalog entry describing a desired asset.
pub type Prompt = &'static str;

/// Every prompt the batch generates, in generation order.
pub const PROMPT_CATALOG: &[Prompt] = &[
    "Create an SVG of Pippin planting a tree.",
    "Create an SVG of Pippin playing tag with other unicorns.",
    "Create an SVG of Pippin ice skating on a frozen lake.",
    "Create an SVG of Pippin sunbathing on the beach.",
    "Create an SVG of Pippin surfing the waves.",
    "Create an SVG of Pippin building a snowman.",
    "Create an SVG of Pippin sledding down a hill.",
    "Create an SVG of Pippin celebrating a birthday party.",
    "Create an SVG of Pippin flying a hot air balloon.",
    "Create an SVG of Pippin dancing in the rain.",
    "Create an SVG of Pippin playing leapfrog.",
    "Create an SVG of Pippin jumping over hurdles.",
    "Create an SVG of Pippin playing chess.",
    "Create an SVG of Pippin riding a tandem bicycle.",
    "Create an SVG of Pippin performing a cheerleading routine.",
    "Create an SVG of Pippin painting graffiti art.",
    "Create an SVG of Pippin conducting a science experiment.",
    "Create an SVG of Pippin playing volleyball on the beach.",
    "Create an SVG of Pippin dancing salsa at a party.",
    "Create an SVG of Pippin doing a handstand.",
    "Create an SVG of Pippin playing the piano.",
    "Create an SVG of Pippin flying through a hoop of fire.",
    "Create an SVG of Pippin painting Easter eggs.",
    "Create an SVG of Pippin riding a Ferris wheel.",
    "Create an SVG of Pippin dancing hip-hop in a cityscape.",
    "Create an SVG of Pippin playing basketball.",
    "Create an SVG of Pippin performing a tightrope walk.",
    "Create an SVG of Pippin hosting a game show.",
    "Create an SVG of Pippin dancing with shadow puppets.",
    "Create an SVG of Pippin painting a mural on a wall.",
    "Create an SVG of Pippin playing frisbee in the park.",
    "Create an SVG of Pippin riding a carousel horse.",
    "Create an SVG of Pippin flying a pirate ship.",
    "Create an SVG of Pippin doing a hand clap dance.",
    "Create an SVG of Pippin painting abstract art.",
    "Create an SVG of Pippin riding a zip line.",
    "Create an SVG of Pippin performing a ballet dance.",
    "Create an SVG of Pippin playing the violin.",
    "Create an SVG of Pippin riding a motorcycle.",
    "Create an SVG of Pippin doing cartwheels on the beach.",
    "Create an SVG of Pippin hosting a tea party.",
    "Create an SVG of Pippin playing badminton.",
    "Create an SVG of Pippin doing tai chi in a garden.",
    "Create an SVG of Pippin juggling flaming torches.",
    "Create an SVG of Pippin riding a snow scooter.",
    "Create an SVG of Pippin performing a slam dance.",
    "Create an SVG of Pippin flying a superhero cape.",
    "Create an SVG of Pippin doing a split dance move.",
    "Create an SVG of Pippin painting with spray cans.",
    "Create an SVG of Pippin performing a mime act.",
    "Create an SVG of Pippin dancing under the stars.",
    "Create an SVG of Pippin playing hopscotch on a sidewalk.",
    "Create an SVG of Pippin doing a conga line.",
    "Create an SVG of Pippin performing a tango dance.",
    "Create an SVG of Pippin riding a tandem bike with friends.",
    "Create an SVG of Pippin doing breakdancing moves.",
    "Create an SVG of Pippin painting with watercolors.",
    "Create an SVG of Pippin riding a scooter through the city.",
    "Create an SVG of Pippin performing a drum solo.",
    "Create an SVG of Pippin dancing in a disco ball.",
    "Create an SVG of Pippin playing maracas in a band.",
    "Create an SVG of Pippin doing a belly dance.",
    "Create an SVG of Pippin riding a paddleboat on a lake.",
    "Create an SVG of Pippin performing a magic show.",
    "Create an SVG of Pippin dancing with LED lights.",
    "Create an SVG of Pippin playing the harmonica.",
    "Create an SVG of Pippin riding a surfboard on a giant wave.",
    "Create an SVG of Pippin performing a flash mob dance.",
    "Create an SVG of Pippin dancing in a field of tulips.",
    "Create an SVG of Pippin playing the xylophone.",
    "Create an SVG of Pippin riding a hoverboard.",
    "Create an SVG of Pippin performing a synchronized dance routine.",
    "Create an SVG of Pippin dancing with holographic effects.",
    "Create an SVG of Pippin playing tambourine in a folk band.",
    "Create an SVG of Pippin dancing with balloons around.",
    "Create an SVG of Pippin riding a magic carpet.",
    "Create an SVG of Pippin performing a robot dance.",
    "Create an SVG of Pippin dancing in a snowstorm.",
    "Create an SVG of Pippin playing the accordion.",
    "Create an SVG of Pippin dancing on a tightrope.",
    "Create an SVG of Pippin performing a traditional folk dance.",
    "Create an SVG of Pippin dancing amidst falling cherry blossoms.",
    "Create an SVG of Pippin playing the steel drums on a tropical island.",
    "Create an SVG of Pippin dancing with luminescent orbs.",
    "Create an SVG of Pippin performing a contemporary dance.",
    "Create an SVG of Pippin dancing with fireflies at dusk.",
    "Create an SVG of Pippin playing the bagpipes in a parade.",
    "Create an SVG of Pippin dancing through a kaleidoscope tunnel.",
    "Create an SVG of Pippin performing a traditional ballet pirouette.",
    "Create an SVG of Pippin dancing with musical notes floating around.",
    "Create an SVG of Pippin riding a mechanical bull.",
    "Create an SVG of Pippin performing a salsa dance on a dance floor.",
    "Create an SVG of Pippin dancing in a field under a full moon.",
    "Create an SVG of Pippin playing the ocarina in a magical forest.",
    "Create an SVG of Pippin dancing with colorful streamers.",
    "Create an SVG of Pippin performing a traditional cultural dance.",
    "Create an SVG of Pippin dancing amidst floating lanterns.",
];
