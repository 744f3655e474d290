/// Byte order used for every multi-byte field of the tag format.
///
/// Java edition data is [`BigEndian`](zerocopy::BigEndian); the same codec
/// reads Bedrock-style data when instantiated with
/// [`LittleEndian`](zerocopy::LittleEndian).
pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}
