use num::Num;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ZeroSpVec;

impl<N> Serialize for ZeroSpVec<N>
where
    N: Num + Serialize + Copy,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // len plus ordered (index, value) entries
        let mut state = serializer.serialize_struct("ZeroSpVec", 2)?;
        state.serialize_field("len", &(self.len() as u64))?;
        let entries: Vec<(u64, N)> = self.raw_iter().map(|(idx, val)| (idx as u64, *val)).collect();
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

impl<'de, N> Deserialize<'de> for ZeroSpVec<N>
where
    N: Num + Deserialize<'de> + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ZeroSpVecData<N> {
            len: u64,
            entries: Vec<(u64, N)>,
        }

        let data = ZeroSpVecData::deserialize(deserializer)?;
        let len = data.len as usize;
        if let Some((idx, _)) = data.entries.iter().find(|(idx, _)| *idx as usize >= len) {
            return Err(serde::de::Error::custom(format!(
                "entry index {idx} out of bounds for length {len}"
            )));
        }
        Ok(ZeroSpVec::from_pairs(
            len,
            data.entries.into_iter().map(|(idx, val)| (idx as usize, val)),
        ))
    }
}
